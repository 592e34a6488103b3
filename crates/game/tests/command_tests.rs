use {
    game::{AnkleLatch, Command},
    pose::{LandmarkId, Landmarks},
    rand::{SeedableRng, rngs::StdRng},
    std::collections::HashSet,
};

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

const REST: AnkleLatch = AnkleLatch {
    left: 0.9,
    right: 0.9,
};

#[test]
fn test_standing_satisfies_nothing() {
    for command in Command::ALL {
        assert!(!command.is_satisfied(&standing(), Some(&REST)), "{command}");
    }
}

#[test]
fn test_raise_hands() {
    let up = standing()
        .with(LandmarkId::LeftWrist, 0.3, 0.2)
        .with(LandmarkId::RightWrist, 0.7, 0.2);
    assert!(Command::RaiseHands.is_satisfied(&up, None));

    let down = standing()
        .with(LandmarkId::LeftWrist, 0.3, 0.4)
        .with(LandmarkId::RightWrist, 0.7, 0.4);
    assert!(!Command::RaiseHands.is_satisfied(&down, None));

    let one = standing().with(LandmarkId::LeftWrist, 0.3, 0.2);
    assert!(!Command::RaiseHands.is_satisfied(&one, None));
}

#[test]
fn test_lean_left_needs_margin() {
    let lean = standing().with(LandmarkId::LeftShoulder, 0.3, 0.4);
    assert!(Command::LeanLeft.is_satisfied(&lean, None));
    assert!(!Command::LeanRight.is_satisfied(&lean, None));

    let slight = standing().with(LandmarkId::LeftShoulder, 0.37, 0.4);
    assert!(!Command::LeanLeft.is_satisfied(&slight, None));
}

#[test]
fn test_lean_right_needs_margin() {
    let lean = standing().with(LandmarkId::RightShoulder, 0.7, 0.4);
    assert!(Command::LeanRight.is_satisfied(&lean, None));
    assert!(!Command::LeanLeft.is_satisfied(&lean, None));

    let slight = standing().with(LandmarkId::RightShoulder, 0.63, 0.4);
    assert!(!Command::LeanRight.is_satisfied(&slight, None));
}

#[test]
fn test_jump_compares_each_ankle_with_its_own_rest() {
    let jump = standing()
        .with(LandmarkId::LeftAnkle, 0.4, 0.7)
        .with(LandmarkId::RightAnkle, 0.6, 0.5);
    let rest = AnkleLatch {
        left: 0.9,
        right: 0.7,
    };
    assert!(Command::Jump.is_satisfied(&jump, Some(&rest)));

    // right ankle only 0.05 above its rest
    let rest = AnkleLatch {
        left: 0.9,
        right: 0.55,
    };
    assert!(!Command::Jump.is_satisfied(&jump, Some(&rest)));
}

#[test]
fn test_jump_ignores_left_rest_for_right_ankle() {
    let rest = AnkleLatch {
        left: 0.9,
        right: 0.7,
    };
    // right ankle is 0.15 above the left rest but only 0.05 above its own
    let pose = standing()
        .with(LandmarkId::LeftAnkle, 0.4, 0.75)
        .with(LandmarkId::RightAnkle, 0.6, 0.65);
    assert!(!Command::Jump.is_satisfied(&pose, Some(&rest)));
}

#[test]
fn test_jump_needs_latch() {
    let jump = standing()
        .with(LandmarkId::LeftAnkle, 0.4, 0.1)
        .with(LandmarkId::RightAnkle, 0.6, 0.1);
    assert!(!Command::Jump.is_satisfied(&jump, None));
    assert!(Command::Jump.is_satisfied(&jump, Some(&REST)));
}

#[test]
fn test_latch_reads_ankles() {
    let latch = AnkleLatch::from_landmarks(&standing().with(LandmarkId::RightAnkle, 0.6, 0.8));
    assert_eq!(latch, AnkleLatch {
        left: 0.9,
        right: 0.8
    });
}

#[test]
fn test_labels_and_wire_names_agree() {
    for command in Command::ALL {
        let json = serde_json::to_string(&command).unwrap();
        assert_eq!(json, format!("\"{}\"", command.label()));
        assert_eq!(command.to_string(), command.label());
    }
    assert_eq!(Command::Jump.label(), "Sauter");
    assert_eq!(Command::LeanLeft.label(), "Se pencher à gauche");
}

#[test]
fn test_random_covers_every_command() {
    let mut rng = StdRng::seed_from_u64(7);
    let seen: HashSet<_> = (0..200).map(|_| Command::random(&mut rng)).collect();
    assert_eq!(seen.len(), Command::ALL.len());
}
