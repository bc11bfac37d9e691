//! Experiment data model: variants and lifecycle rules.
//!
//! An experiment is an ordered list of variants where index 0 is always the
//! control. The list holds between 2 and 5 variants; the control and the
//! first treatment variant cannot be removed.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Minimum number of variants in an experiment (control + one treatment).
pub const MIN_VARIANTS: usize = 2;

/// Maximum number of variants in an experiment.
pub const MAX_VARIANTS: usize = 5;

/// One arm of an A/B experiment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    pub name: String,
    #[serde(default)]
    pub visitors: u64,
    #[serde(default)]
    pub conversions: u64,
}

impl Variant {
    /// Create a variant with zero counts.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visitors: 0,
            conversions: 0,
        }
    }

    /// Set visitor/conversion counts.
    pub fn with_counts(mut self, visitors: u64, conversions: u64) -> Self {
        self.visitors = visitors;
        self.conversions = conversions;
        self
    }

    /// Conversion rate as a fraction in [0, 1].
    ///
    /// Zero visitors means no data, which is reported as a rate of 0
    /// rather than an error.
    pub fn conversion_rate(&self) -> f64 {
        if self.visitors == 0 {
            return 0.0;
        }
        self.conversions as f64 / self.visitors as f64
    }

    /// Conversion rate as a percentage.
    pub fn conversion_rate_percent(&self) -> f64 {
        self.conversion_rate() * 100.0
    }

    /// A variant with no visitors has an undefined rate and standard error
    /// and is excluded from winner selection.
    pub fn is_evaluable(&self) -> bool {
        self.visitors > 0
    }
}

/// An ordered set of variants; index 0 is the control.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experiment {
    pub name: String,
    variants: Vec<Variant>,
}

impl Experiment {
    /// Create a fresh experiment with a control and one treatment variant,
    /// both with zero counts.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variants: vec![Variant::new("Control"), Variant::new("Variant A")],
        }
    }

    /// Build an experiment from an explicit variant list.
    ///
    /// The first variant is taken as the control. Fails when fewer than
    /// [`MIN_VARIANTS`] or more than [`MAX_VARIANTS`] are given.
    pub fn from_variants(name: impl Into<String>, variants: Vec<Variant>) -> Result<Self> {
        if variants.len() < MIN_VARIANTS {
            return Err(Error::TooFewVariants {
                min: MIN_VARIANTS,
                got: variants.len(),
            });
        }
        if variants.len() > MAX_VARIANTS {
            return Err(Error::VariantLimitReached(MAX_VARIANTS));
        }
        Ok(Self {
            name: name.into(),
            variants,
        })
    }

    /// Append the next letter-named treatment variant ("Variant B", ...).
    pub fn add_variant(&mut self) -> Result<&Variant> {
        if self.variants.len() >= MAX_VARIANTS {
            return Err(Error::VariantLimitReached(MAX_VARIANTS));
        }
        // Control is unnamed in the sequence, so treatment N gets letter N.
        let letter = (b'A' + (self.variants.len() - 1) as u8) as char;
        self.variants.push(Variant::new(format!("Variant {}", letter)));
        Ok(self.variants.last().expect("just pushed"))
    }

    /// Remove a treatment variant by index.
    ///
    /// The control (index 0) and the first treatment (index 1) are
    /// protected so the experiment always keeps at least two variants.
    pub fn remove_variant(&mut self, index: usize) -> Result<Variant> {
        if index >= self.variants.len() {
            return Err(Error::VariantNotFound(index));
        }
        if index < MIN_VARIANTS {
            return Err(Error::ProtectedVariant(index));
        }
        Ok(self.variants.remove(index))
    }

    /// Update counts for the variant at `index`.
    pub fn set_counts(&mut self, index: usize, visitors: u64, conversions: u64) -> Result<()> {
        let variant = self
            .variants
            .get_mut(index)
            .ok_or(Error::VariantNotFound(index))?;
        variant.visitors = visitors;
        variant.conversions = conversions;
        Ok(())
    }

    /// Rename the variant at `index`.
    pub fn rename_variant(&mut self, index: usize, name: impl Into<String>) -> Result<()> {
        let variant = self
            .variants
            .get_mut(index)
            .ok_or(Error::VariantNotFound(index))?;
        variant.name = name.into();
        Ok(())
    }

    /// The control variant.
    pub fn control(&self) -> &Variant {
        &self.variants[0]
    }

    /// All treatment variants, in order.
    pub fn treatments(&self) -> &[Variant] {
        &self.variants[1..]
    }

    /// All variants including the control.
    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// True when every variant has at least one visitor.
    ///
    /// The engine tolerates zero-visitor variants, but callers typically
    /// gate calculation on this the way the original calculator disabled
    /// its button.
    pub fn is_ready(&self) -> bool {
        self.variants.iter().all(Variant::is_evaluable)
    }
}
