/// Which backdrop to show behind a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backdrop {
    /// First level.
    Opening,
    Middle,
    /// Level 9 onwards.
    Finale,
}

/// Values for the external text renderer: hearts in the top-left corner and
/// the level label in the top-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hud {
    pub lives: u8,
    /// 1-based.
    pub level_number: usize,
}

impl Hud {
    pub fn new(lives: u8, level_index: usize) -> Self {
        Self {
            lives,
            level_number: level_index + 1,
        }
    }

    /// One `'1'` per life; the heart font draws each as a heart.
    pub fn lives_glyphs(&self) -> String {
        "1".repeat(self.lives as usize)
    }

    pub fn level_label(&self) -> String {
        format!("level {}", self.level_number)
    }

    pub fn backdrop(&self) -> Backdrop {
        match self.level_number {
            0 | 1 => Backdrop::Opening,
            n if n >= 9 => Backdrop::Finale,
            _ => Backdrop::Middle,
        }
    }
}
