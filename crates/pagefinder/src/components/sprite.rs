use glam::Vec2;

/// Identifies which sprite sheet an entity's frames are cut from.
/// Index into the AssetManifest's sheet list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SheetId(pub u32);

/// Visual placement and collision shaping for an entity.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteComponent {
    /// Which sheet the animation frames belong to.
    pub sheet: SheetId,
    /// Normalized anchor inside the draw rect: (0,0) top-left, (0.5,0) top-centre, (0.5,0.5) centre.
    pub origin: Vec2,
    /// Multiplier on the current frame's pixel size.
    pub scale: Vec2,
    /// Fraction shaved off the near (left/top) edges for collision.
    pub inset_min: Vec2,
    /// Fraction shaved off the far (right/bottom) edges for collision.
    pub inset_max: Vec2,
    /// Mirror horizontally when drawn. Never affects collision.
    pub flipped: bool,
    /// Whether this entity takes part in collision checks.
    pub colliding: bool,
    /// Emit the collision box into the render buffer as a debug overlay.
    pub draw_collision: bool,
}

impl Default for SpriteComponent {
    fn default() -> Self {
        Self {
            sheet: SheetId(0),
            origin: Vec2::ZERO,
            scale: Vec2::ONE,
            inset_min: Vec2::ZERO,
            inset_max: Vec2::ZERO,
            flipped: false,
            colliding: false,
            draw_collision: false,
        }
    }
}

impl SpriteComponent {
    pub fn new(sheet: SheetId) -> Self {
        Self {
            sheet,
            ..Default::default()
        }
    }

    pub fn with_origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_scale(mut self, scale: Vec2) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_insets(mut self, min: Vec2, max: Vec2) -> Self {
        self.inset_min = min;
        self.inset_max = max;
        self
    }

    pub fn colliding(mut self) -> Self {
        self.colliding = true;
        self
    }

    /// True when the insets leave a non-degenerate box on both axes.
    pub fn insets_valid(&self) -> bool {
        let sum = self.inset_min + self.inset_max;
        self.inset_min.cmpge(Vec2::ZERO).all()
            && self.inset_max.cmpge(Vec2::ZERO).all()
            && sum.x < 1.0
            && sum.y < 1.0
    }
}
