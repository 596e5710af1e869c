//! Table configuration.

/// Configuration for a [`Table`](crate::Table).
///
/// Use the builder methods to customize options:
///
/// ```
/// use pontoon::TableOptions;
///
/// let options = TableOptions::default()
///     .with_hit_on_soft_17(false)
///     .with_starting_pot(250)
///     .with_max_bet(25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    /// Whether the dealer draws on a soft 17.
    pub hit_on_soft_17: bool,
    /// Chips the player sits down with.
    pub starting_pot: u32,
    /// Largest bet the table accepts.
    pub max_bet: u32,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            hit_on_soft_17: true,
            starting_pot: 100,
            max_bet: 10,
        }
    }
}

impl TableOptions {
    /// Sets the dealer's soft-17 rule.
    ///
    /// # Example
    ///
    /// ```
    /// use pontoon::TableOptions;
    ///
    /// let options = TableOptions::default().with_hit_on_soft_17(false);
    /// assert!(!options.hit_on_soft_17);
    /// ```
    #[must_use]
    pub const fn with_hit_on_soft_17(mut self, hit: bool) -> Self {
        self.hit_on_soft_17 = hit;
        self
    }

    /// Sets the player's starting pot.
    ///
    /// # Example
    ///
    /// ```
    /// use pontoon::TableOptions;
    ///
    /// let options = TableOptions::default().with_starting_pot(250);
    /// assert_eq!(options.starting_pot, 250);
    /// ```
    #[must_use]
    pub const fn with_starting_pot(mut self, pot: u32) -> Self {
        self.starting_pot = pot;
        self
    }

    /// Sets the table's maximum bet.
    ///
    /// # Example
    ///
    /// ```
    /// use pontoon::TableOptions;
    ///
    /// let options = TableOptions::default().with_max_bet(25);
    /// assert_eq!(options.max_bet, 25);
    /// ```
    #[must_use]
    pub const fn with_max_bet(mut self, max_bet: u32) -> Self {
        self.max_bet = max_bet;
        self
    }
}
