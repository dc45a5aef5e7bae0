use rand::Rng;
use ratatui::style::Color;

use crate::shuffle::shuffle_with;

/// Decorative backdrop shown behind a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scene {
    pub name: &'static str,
    pub background: Color,
    pub accent: Color,
}

pub const SCENES: [Scene; 10] = [
    Scene {
        name: "Alpine Lake",
        background: Color::Rgb(16, 34, 48),
        accent: Color::Rgb(120, 190, 230),
    },
    Scene {
        name: "Misty Valley",
        background: Color::Rgb(28, 36, 30),
        accent: Color::Rgb(170, 200, 170),
    },
    Scene {
        name: "Turquoise Shore",
        background: Color::Rgb(10, 40, 44),
        accent: Color::Rgb(90, 210, 200),
    },
    Scene {
        name: "Sunlit Forest",
        background: Color::Rgb(20, 38, 18),
        accent: Color::Rgb(150, 210, 100),
    },
    Scene {
        name: "Mountain Dawn",
        background: Color::Rgb(44, 28, 36),
        accent: Color::Rgb(240, 170, 140),
    },
    Scene {
        name: "Pine Ridge",
        background: Color::Rgb(18, 32, 26),
        accent: Color::Rgb(110, 180, 140),
    },
    Scene {
        name: "Desert Canyon",
        background: Color::Rgb(46, 30, 18),
        accent: Color::Rgb(230, 160, 90),
    },
    Scene {
        name: "Fern Gully",
        background: Color::Rgb(14, 36, 22),
        accent: Color::Rgb(130, 220, 130),
    },
    Scene {
        name: "Glacier Bay",
        background: Color::Rgb(22, 30, 46),
        accent: Color::Rgb(180, 210, 250),
    },
    Scene {
        name: "Starry Peaks",
        background: Color::Rgb(14, 16, 36),
        accent: Color::Rgb(200, 190, 255),
    },
];

/// A session's shuffled rotation of scenes.
#[derive(Debug, Clone)]
pub struct Scenery {
    scenes: Vec<Scene>,
}

impl Scenery {
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            scenes: shuffle_with(&SCENES[..], rng),
        }
    }

    pub fn in_order() -> Self {
        Self {
            scenes: SCENES.to_vec(),
        }
    }

    pub fn scene_for(&self, step: usize) -> Scene {
        self.scenes[step % self.scenes.len()]
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }
}
