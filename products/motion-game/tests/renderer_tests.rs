use {
    base::Vec2,
    futures_util::StreamExt,
    game::{Command, Game, GameConfig},
    image::{Image, PixelFormat},
    motion_game::*,
    pose::{LandmarkId, Landmarks, PoseError, PoseSource, SharedPoseSource, shared},
    rand::{SeedableRng, rngs::StdRng},
    std::{
        sync::{Arc, Mutex},
        time::{Duration, Instant},
    },
};

const HEADER: &[u8] = b"--frame\r\nContent-Type: image/jpeg\r\n\r\n";

fn standing() -> Landmarks {
    Landmarks::default()
        .with(LandmarkId::Nose, 0.5, 0.3)
        .with(LandmarkId::LeftWrist, 0.3, 0.6)
        .with(LandmarkId::RightWrist, 0.7, 0.6)
        .with(LandmarkId::LeftShoulder, 0.4, 0.4)
        .with(LandmarkId::RightShoulder, 0.6, 0.4)
        .with(LandmarkId::LeftHip, 0.4, 0.6)
        .with(LandmarkId::RightHip, 0.6, 0.6)
        .with(LandmarkId::LeftAnkle, 0.4, 0.9)
        .with(LandmarkId::RightAnkle, 0.6, 0.9)
}

fn performing(command: Command) -> Landmarks {
    match command {
        Command::RaiseHands => standing()
            .with(LandmarkId::LeftWrist, 0.3, 0.2)
            .with(LandmarkId::RightWrist, 0.7, 0.2),
        Command::LeanLeft => standing().with(LandmarkId::LeftShoulder, 0.3, 0.4),
        Command::LeanRight => standing().with(LandmarkId::RightShoulder, 0.7, 0.4),
        Command::Jump => standing()
            .with(LandmarkId::LeftAnkle, 0.4, 0.7)
            .with(LandmarkId::RightAnkle, 0.6, 0.7),
    }
}

/// Answers every detection with whatever the test last scripted.
struct Scripted {
    next: Arc<Mutex<Result<Option<Landmarks>, String>>>,
}

impl PoseSource for Scripted {
    fn detect(&mut self, _image: &Image) -> Result<Option<Landmarks>, PoseError> {
        self.next
            .lock()
            .unwrap()
            .clone()
            .map_err(PoseError::Backend)
    }
}

fn scripted() -> (SharedPoseSource, Arc<Mutex<Result<Option<Landmarks>, String>>>) {
    let next = Arc::new(Mutex::new(Ok(None)));
    (
        shared(Scripted {
            next: Arc::clone(&next),
        }),
        next,
    )
}

fn new_game(now: Instant) -> Game {
    Game::with_rng(GameConfig::default(), now, StdRng::seed_from_u64(11))
}

fn frame() -> Image {
    Image::black(Vec2::new(64, 48))
}

fn expect_part(cycle: Cycle) -> Vec<u8> {
    match cycle {
        Cycle::Part(part) => part,
        other => panic!("expected a part, got {:?}", other),
    }
}

#[test]
fn test_multipart_layout() {
    let part = multipart_part(&[1, 2, 3]);
    assert_eq!(&part[..HEADER.len()], HEADER);
    assert_eq!(&part[HEADER.len()..], &[1, 2, 3, b'\r', b'\n']);
}

#[test]
fn test_empty_scene_still_streams() {
    let t0 = Instant::now();
    let (pose, _) = scripted();
    let game = new_game(t0);
    let part = expect_part(render_frame(&frame(), &pose, &game, t0));
    assert!(part.starts_with(HEADER));
    assert_eq!(&part[HEADER.len()..HEADER.len() + 2], &[0xFF, 0xD8]);
    assert!(part.ends_with(b"\r\n"));
    assert_eq!(game.poll(t0).score, 0);
}

#[test]
fn test_performed_command_scores() {
    let t0 = Instant::now();
    let (pose, next) = scripted();
    let game = new_game(t0);
    game.latch_ankles(&standing());
    let command = game.poll(t0).command;
    *next.lock().unwrap() = Ok(Some(performing(command)));

    expect_part(render_frame(&frame(), &pose, &game, t0 + Duration::from_secs(1)));
    let data = game.poll(t0 + Duration::from_secs(1));
    assert_eq!(data.score, 1);
    assert!(data.success);
}

#[test]
fn test_skeleton_is_drawn_on_a_copy() {
    let t0 = Instant::now();
    let (pose, next) = scripted();
    let game = new_game(t0);
    *next.lock().unwrap() = Ok(Some(standing()));
    let source = frame();
    let part = expect_part(render_frame(&source, &pose, &game, t0));
    assert!(source.data.iter().all(|&b| b == 0));

    let (empty, _) = scripted();
    let plain = expect_part(render_frame(&source, &empty, &game, t0));
    assert_ne!(part, plain);
}

#[test]
fn test_detection_error_skips_frame() {
    let t0 = Instant::now();
    let (pose, next) = scripted();
    let game = new_game(t0);
    *next.lock().unwrap() = Err("model exploded".to_string());
    assert!(matches!(render_frame(&frame(), &pose, &game, t0), Cycle::Skip));
}

#[test]
fn test_encode_error_skips_frame() {
    let t0 = Instant::now();
    let (pose, _) = scripted();
    let game = new_game(t0);
    let yuyv = Image::new(Vec2::new(2, 1), vec![0; 4], PixelFormat::Yuyv);
    assert!(matches!(render_frame(&yuyv, &pose, &game, t0), Cycle::Skip));
}

#[test]
fn test_game_over_ends_rendering() {
    let t0 = Instant::now();
    let (pose, next) = scripted();
    let game = new_game(t0);
    game.latch_ankles(&standing());
    let command = game.poll(t0).command;
    *next.lock().unwrap() = Ok(Some(performing(command)));

    let late = t0 + Duration::from_secs(61);
    assert!(matches!(render_frame(&frame(), &pose, &game, late), Cycle::GameOver));
    // the point scored on the last frame still counts
    assert_eq!(game.poll(late).score, 1);
    assert!(game.is_over());
}

#[tokio::test]
async fn test_renderer_follows_the_slot() {
    let (pose, _) = scripted();
    let game = new_game(Instant::now());
    let (slot, frames) = FrameSlot::channel();
    let mut renderer = Renderer::new(frames, pose, game);

    slot.publish(Arc::new(frame()));
    let part = renderer.next_part().await.unwrap();
    assert!(part.starts_with(HEADER));

    drop(slot);
    assert!(renderer.next_part().await.is_none());
}

#[tokio::test]
async fn test_stream_ends_at_game_over() {
    let (pose, _) = scripted();
    let config = GameConfig {
        duration: Duration::ZERO,
        ..GameConfig::default()
    };
    let game = Game::with_rng(config, Instant::now(), StdRng::seed_from_u64(1));
    let (slot, frames) = FrameSlot::channel();
    let stream = Renderer::new(frames, pose, game.clone()).into_stream();

    tokio::time::sleep(Duration::from_millis(5)).await;
    slot.publish(Arc::new(frame()));
    let parts: Vec<_> = stream.collect().await;
    assert!(parts.is_empty());
    assert!(game.is_over());
}
