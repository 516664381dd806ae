//! Table configuration options.

/// How many cards the dealer may draw each time a hand is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum DealerDraw {
    /// At most one card per player action.
    #[default]
    Single,
    /// Keep drawing until the dealer stands or busts.
    UntilStand,
}

/// Configuration options for a [`Table`](crate::Table).
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjtable::{DealerDraw, TableOptions};
///
/// let options = TableOptions::default()
///     .with_hit_soft_17(false)
///     .with_dealer_draw(DealerDraw::UntilStand);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableOptions {
    /// Whether the dealer draws on 17 when holding an ace.
    pub hit_soft_17: bool,
    /// Dealer draws allowed per resolution.
    pub dealer_draw: DealerDraw,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            hit_soft_17: true,
            dealer_draw: DealerDraw::Single,
        }
    }
}

impl TableOptions {
    /// Sets whether the dealer draws on soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_hit_soft_17(false);
    /// assert!(!options.hit_soft_17);
    /// ```
    #[must_use]
    pub const fn with_hit_soft_17(mut self, hit: bool) -> Self {
        self.hit_soft_17 = hit;
        self
    }

    /// Sets how many cards the dealer may draw per resolution.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{DealerDraw, TableOptions};
    ///
    /// let options = TableOptions::default().with_dealer_draw(DealerDraw::UntilStand);
    /// assert_eq!(options.dealer_draw, DealerDraw::UntilStand);
    /// ```
    #[must_use]
    pub const fn with_dealer_draw(mut self, draw: DealerDraw) -> Self {
        self.dealer_draw = draw;
        self
    }
}
