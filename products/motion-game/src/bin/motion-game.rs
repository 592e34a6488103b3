use {
    anyhow::Context,
    base::log,
    game::Game,
    motion_game::*,
    pose::YoloPose,
    std::time::Instant,
    tokio::{net::TcpListener, task::AbortHandle},
    video::VideoIn,
};

async fn shutdown_signal(producer: AbortHandle) {
    if let Err(error) = tokio::signal::ctrl_c().await {
        log::error!("failed to listen for ctrl-c: {}", error);
        return;
    }
    log::info!("shutting down");
    // closes the frame slot, which ends every open video stream
    producer.abort();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    match &config.log_dir {
        Some(dir) => base::init_file_logger(dir)
            .with_context(|| format!("failed to open log directory {}", dir.display()))?,
        None => base::init_stdout_logger(),
    }

    log::info!("loading pose model {}", config.model.display());
    let pose = pose::shared(
        YoloPose::new(&config.model)
            .with_context(|| format!("failed to load {}", config.model.display()))?
            .with_conf_threshold(config.confidence),
    );

    let game = Game::new(config.game, Instant::now());

    log::info!("opening camera {:?}", config.camera);
    let videoin = VideoIn::open(config.video_in())
        .await
        .context("failed to open camera")?;

    let (slot, frames) = FrameSlot::channel();
    let producer = tokio::spawn(
        Producer::new(videoin, slot, pose.clone(), game.clone()).run(),
    );

    let app = create_router(AppState {
        frames,
        pose,
        game,
    });

    let listener = TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;
    let url = config.browser_url();
    log::info!("serving on http://{}", config.addr);

    if config.open_browser {
        tokio::task::spawn_blocking(move || {
            if let Err(error) = webbrowser::open(&url) {
                log::warn!("could not open a browser on {}: {}", url, error);
            }
        });
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(producer.abort_handle()))
        .await
        .context("server error")?;

    producer.abort();
    let _ = producer.await;
    log::info!("camera released, bye");
    Ok(())
}
