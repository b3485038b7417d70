//! Carousel State Machines
//!
//! Pure position models, free of any DOM access so they can be driven by
//! tests as easily as by event handlers.

/// Scroll direction for a carousel transition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// Offsets closer than this are treated as the same position.
const OFFSET_EPSILON: f64 = 0.5;

/// Scroll-offset carousel: pages are one container width wide.
///
/// `offset` is always within `[0, scroll_width - container_width]` and
/// `index` is the page that offset lands on, `[0, page_count - 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollPager {
    pub index: usize,
    pub offset: f64,
    pub container_width: f64,
    pub scroll_width: f64,
}

impl ScrollPager {
    pub fn new(container_width: f64, scroll_width: f64) -> Self {
        let mut pager = Self::default();
        pager.measure(container_width, scroll_width, 0.0);
        pager
    }

    /// Sync with the measured element. Offset is re-clamped and the index
    /// re-derived, so user scrolling between clicks is picked up.
    pub fn measure(&mut self, container_width: f64, scroll_width: f64, offset: f64) {
        self.container_width = container_width.max(0.0);
        self.scroll_width = scroll_width.max(self.container_width);
        self.offset = offset.clamp(0.0, self.max_offset());
        self.index = self.page_at(self.offset);
    }

    pub fn is_measured(&self) -> bool {
        self.container_width > 0.0
    }

    pub fn max_offset(&self) -> f64 {
        (self.scroll_width - self.container_width).max(0.0)
    }

    /// Number of pages; zero until the container has been measured.
    pub fn page_count(&self) -> usize {
        if !self.is_measured() {
            return 0;
        }
        ((self.scroll_width / self.container_width) - OFFSET_EPSILON / self.container_width)
            .ceil()
            .max(1.0) as usize
    }

    pub fn last_page(&self) -> usize {
        self.page_count().saturating_sub(1)
    }

    pub fn at_start(&self) -> bool {
        self.offset <= OFFSET_EPSILON
    }

    pub fn at_end(&self) -> bool {
        self.offset >= self.max_offset() - OFFSET_EPSILON
    }

    fn page_at(&self, offset: f64) -> usize {
        if !self.is_measured() {
            return 0;
        }
        if self.max_offset() > 0.0 && offset >= self.max_offset() - OFFSET_EPSILON {
            return self.last_page();
        }
        ((offset / self.container_width).floor() as usize).min(self.last_page())
    }

    /// Move one container width. Returns the new offset to scroll to, or
    /// `None` when nothing moved (unmeasured, or already at the boundary).
    pub fn advance(&mut self, direction: Direction) -> Option<f64> {
        if !self.is_measured() {
            return None;
        }
        let target = match direction {
            Direction::Left => self.offset - self.container_width,
            Direction::Right => self.offset + self.container_width,
        }
        .clamp(0.0, self.max_offset());

        if (target - self.offset).abs() < OFFSET_EPSILON {
            return None;
        }
        self.offset = target;
        self.index = self.page_at(target);
        Some(target)
    }

    /// Auto-advance step: move right, wrapping to the first page from the last.
    pub fn tick(&mut self) -> Option<f64> {
        if !self.is_measured() {
            return None;
        }
        if self.index >= self.last_page() || self.at_end() {
            self.reset()
        } else {
            self.advance(Direction::Right)
        }
    }

    /// Jump back to the first page.
    pub fn reset(&mut self) -> Option<f64> {
        let moved = !self.at_start();
        self.offset = 0.0;
        self.index = 0;
        moved.then_some(0.0)
    }
}

/// What happens when an index carousel steps past either end
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Boundary {
    Clamp,
    Wrap,
}

/// Index carousel over `len` slides (one active slide at a time).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexCarousel {
    index: usize,
    len: usize,
    boundary: Boundary,
}

impl IndexCarousel {
    pub fn new(len: usize, boundary: Boundary) -> Self {
        Self { index: 0, len, boundary }
    }

    /// Start on a given slide (clamped into range).
    pub fn starting_at(mut self, index: usize) -> Self {
        self.select(index);
        self
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_active(&self, index: usize) -> bool {
        !self.is_empty() && self.index == index
    }

    pub fn can_go(&self, direction: Direction) -> bool {
        if self.len < 2 {
            return false;
        }
        match (self.boundary, direction) {
            (Boundary::Wrap, _) => true,
            (Boundary::Clamp, Direction::Left) => self.index > 0,
            (Boundary::Clamp, Direction::Right) => self.index + 1 < self.len,
        }
    }

    /// Step once; returns whether the index changed.
    pub fn step(&mut self, direction: Direction) -> bool {
        if !self.can_go(direction) {
            return false;
        }
        let last = self.len - 1;
        self.index = match direction {
            Direction::Left if self.index == 0 => last,
            Direction::Left => self.index - 1,
            Direction::Right if self.index == last => 0,
            Direction::Right => self.index + 1,
        };
        true
    }

    pub fn next(&mut self) -> bool {
        self.step(Direction::Right)
    }

    pub fn prev(&mut self) -> bool {
        self.step(Direction::Left)
    }

    /// Auto-play step: always wraps to the first slide after the last one.
    pub fn tick(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = (self.index + 1) % self.len;
    }

    pub fn select(&mut self, index: usize) {
        self.index = index.min(self.len.saturating_sub(1));
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Horizontal translation of the track for fixed-width slides.
    pub fn track_offset(&self, slide_width: f64, gap: f64) -> f64 {
        self.index as f64 * (slide_width + gap)
    }
}
