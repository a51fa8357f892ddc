use crate::performance::Performance;

/// Volume credits every genre earns: one credit per seat above thirty.
///
/// Kept as a named function (rather than buried in the trait default) so a
/// genre that wants a bonus composes with it explicitly: call the base rule,
/// then add the delta on top.
pub fn base_volume_credits(performance: &Performance) -> u64 {
    u64::from(performance.audience.saturating_sub(30))
}

/// Pricing and credit rules for one performance of one play.
///
/// One implementation per billable genre. `amount` is in integer minor
/// currency units (cents); all arithmetic is exact, no rounding anywhere.
/// `volume_credits` defaults to the shared base rule; a variant overrides it
/// only to add a genre-specific bonus.
pub trait PerformanceCalculator: std::fmt::Debug {
    fn performance(&self) -> &Performance;

    /// Billed amount for this performance, in cents.
    fn amount(&self) -> u64;

    /// Loyalty credits earned by this performance.
    fn volume_credits(&self) -> u64 {
        base_volume_credits(self.performance())
    }
}

/// Tragedy pricing: 40000 base, plus 1000 per seat above thirty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TragedyCalculator {
    performance: Performance,
}

impl TragedyCalculator {
    pub fn new(performance: Performance) -> Self {
        Self { performance }
    }
}

impl PerformanceCalculator for TragedyCalculator {
    fn performance(&self) -> &Performance {
        &self.performance
    }

    fn amount(&self) -> u64 {
        let audience = u64::from(self.performance.audience);
        let mut result = 40_000;
        if audience > 30 {
            result += 1_000 * (audience - 30);
        }
        result
    }
}

/// Comedy pricing: 30000 base, 300 per seat, plus a surcharge of 10000 and
/// 500 per seat above twenty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComedyCalculator {
    performance: Performance,
}

impl ComedyCalculator {
    pub fn new(performance: Performance) -> Self {
        Self { performance }
    }
}

impl PerformanceCalculator for ComedyCalculator {
    fn performance(&self) -> &Performance {
        &self.performance
    }

    fn amount(&self) -> u64 {
        let audience = u64::from(self.performance.audience);
        let mut result = 30_000;
        if audience > 20 {
            result += 10_000 + 500 * (audience - 20);
        }
        result += 300 * audience;
        result
    }

    /// Comedy adds one credit per five seats on top of the base rule.
    fn volume_credits(&self) -> u64 {
        base_volume_credits(&self.performance) + u64::from(self.performance.audience / 5)
    }
}
