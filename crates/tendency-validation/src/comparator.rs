//! DimensionComparator: runs both classifiers for every dimension of a
//! joined record.

use tendency_core::config::defaults;
use tendency_core::errors::{MembershipError, SchemaError};
use tendency_core::tracing_setup::events;
use tendency_core::{ComparisonRow, Dimension, ScoreRecord, TendencyConfig};
use tendency_fuzzy::{CrispPoleClassifier, FuzzyPoleClassifier, MembershipModel};

/// Everything needed to compare one dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionSpec {
    pub dimension: Dimension,
    /// Base column name, before join suffixes.
    pub column: String,
    pub fuzzy: FuzzyPoleClassifier,
    pub crisp: CrispPoleClassifier,
}

impl DimensionSpec {
    /// Default column, bands, and midpoint for `dimension`.
    pub fn standard(dimension: Dimension) -> Self {
        Self {
            dimension,
            column: dimension.default_column().to_string(),
            fuzzy: FuzzyPoleClassifier::default(),
            crisp: CrispPoleClassifier::default(),
        }
    }
}

/// Comparator over the fixed dimension set, in `Dimension::ALL` order.
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionComparator {
    specs: Vec<DimensionSpec>,
    system_suffix: String,
    reference_suffix: String,
}

impl DimensionComparator {
    pub fn new(
        specs: Vec<DimensionSpec>,
        system_suffix: impl Into<String>,
        reference_suffix: impl Into<String>,
    ) -> Self {
        Self {
            specs,
            system_suffix: system_suffix.into(),
            reference_suffix: reference_suffix.into(),
        }
    }

    /// Default comparator: all four dimensions, default bands and suffixes.
    pub fn standard() -> Self {
        Self::new(
            Dimension::ALL.into_iter().map(DimensionSpec::standard).collect(),
            defaults::DEFAULT_SYSTEM_SUFFIX,
            defaults::DEFAULT_REFERENCE_SUFFIX,
        )
    }

    /// Build one membership model per dimension from the resolved config.
    pub fn from_config(config: &TendencyConfig) -> Result<Self, MembershipError> {
        let specs = Dimension::ALL
            .into_iter()
            .map(|dimension| -> Result<DimensionSpec, MembershipError> {
                let model = MembershipModel::from_config(&config.membership_for(dimension))?;
                Ok(DimensionSpec {
                    dimension,
                    column: config.column_for(dimension).to_string(),
                    fuzzy: FuzzyPoleClassifier::new(model),
                    crisp: CrispPoleClassifier::new(config.midpoint_for(dimension)),
                })
            })
            .collect::<Result<Vec<_>, MembershipError>>()?;
        Ok(Self::new(
            specs,
            config.input.system_suffix.clone(),
            config.input.reference_suffix.clone(),
        ))
    }

    pub fn specs(&self) -> &[DimensionSpec] {
        &self.specs
    }

    pub fn spec(&self, dimension: Dimension) -> Option<&DimensionSpec> {
        self.specs.iter().find(|s| s.dimension == dimension)
    }

    /// Joined column name holding the system score.
    pub fn system_column(&self, spec: &DimensionSpec) -> String {
        format!("{}{}", spec.column, self.system_suffix)
    }

    /// Joined column name holding the reference score.
    pub fn reference_column(&self, spec: &DimensionSpec) -> String {
        format!("{}{}", spec.column, self.reference_suffix)
    }

    /// Classify one pair of scores.
    pub fn compare_scores(
        &self,
        spec: &DimensionSpec,
        identity: &str,
        system_score: f64,
        reference_score: f64,
    ) -> ComparisonRow {
        let system_tendency = spec.fuzzy.classify(system_score);
        let reference_tendency = spec.crisp.classify(reference_score);

        if tracing::enabled!(tracing::Level::TRACE) {
            let b = spec.fuzzy.breakdown(system_score);
            events::score_classified(
                spec.dimension,
                system_score,
                b.pole1_total,
                b.pole2_total,
                b.tendency.label(),
            );
        }

        ComparisonRow::new(
            identity,
            spec.dimension,
            system_score,
            reference_score,
            system_tendency,
            reference_tendency,
        )
    }

    /// One row per dimension for `record`.
    ///
    /// A missing column or unreadable score fails the whole record.
    pub fn compare_record<R: ScoreRecord + ?Sized>(
        &self,
        record: &R,
    ) -> Result<Vec<ComparisonRow>, SchemaError> {
        self.specs
            .iter()
            .map(|spec| -> Result<ComparisonRow, SchemaError> {
                let system = record.score(&self.system_column(spec))?;
                let reference = record.score(&self.reference_column(spec))?;
                Ok(self.compare_scores(spec, record.identity(), system, reference))
            })
            .collect()
    }
}

impl Default for DimensionComparator {
    fn default() -> Self {
        Self::standard()
    }
}
