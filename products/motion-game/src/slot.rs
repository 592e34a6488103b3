use {
    image::Image,
    std::sync::Arc,
    tokio::sync::watch,
};

/// Publishing side of the latest-frame slot. Owned by the producer;
/// dropping it ends every stream waiting on the slot.
pub struct FrameSlot {
    sender: watch::Sender<Option<Arc<Image>>>,
}

/// Reading side of the latest-frame slot. Readers only ever see the most
/// recent frame; frames published while a reader is busy are skipped.
#[derive(Clone)]
pub struct FrameReceiver {
    receiver: watch::Receiver<Option<Arc<Image>>>,
}

impl FrameSlot {
    pub fn channel() -> (Self, FrameReceiver) {
        let (sender, receiver) = watch::channel(None);
        (Self { sender }, FrameReceiver { receiver })
    }

    /// Replace the current frame.
    pub fn publish(&self, image: Arc<Image>) {
        self.sender.send_replace(Some(image));
    }

    pub fn subscribe(&self) -> FrameReceiver {
        FrameReceiver {
            receiver: self.sender.subscribe(),
        }
    }
}

impl FrameReceiver {
    /// Wait for a frame this receiver has not seen yet. `None` once the
    /// slot is gone.
    pub async fn next(&mut self) -> Option<Arc<Image>> {
        loop {
            self.receiver.changed().await.ok()?;
            if let Some(image) = self.receiver.borrow_and_update().clone() {
                return Some(image);
            }
        }
    }

    /// The current frame without waiting, if one was ever published.
    pub fn latest(&self) -> Option<Arc<Image>> {
        self.receiver.borrow().clone()
    }
}
