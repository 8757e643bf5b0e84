use crate::core::models::properties::{PROPERTY_COUNT, Property};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Constants of one asymmetric double-sigmoid curve.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DesirabilityParams {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
    pub dmax: f64,
}

impl DesirabilityParams {
    const fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64, dmax: f64) -> Self {
        Self {
            a,
            b,
            c,
            d,
            e,
            f,
            dmax,
        }
    }

    fn is_finite(&self) -> bool {
        [self.a, self.b, self.c, self.d, self.e, self.f, self.dmax]
            .iter()
            .all(|v| v.is_finite())
    }
}

/// One curve per property, indexed by [`Property`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesirabilityTable {
    rows: [DesirabilityParams; PROPERTY_COUNT],
}

#[derive(Debug, Error)]
pub enum ParamLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Unknown property section '{section}' in '{path}'")]
    UnknownProperty { path: String, section: String },
    #[error("Parameter 'dmax' for {property} must be non-zero")]
    ZeroDmax { property: Property },
    #[error("Parameters for {property} must all be finite")]
    NonFinite { property: Property },
}

impl DesirabilityTable {
    /// The fitted ADS constants of Bickerton et al. (2012).
    ///
    /// Rows: MW, ALOGP, HBA, HBD, PSA, ROTB, AROM, ALERTS.
    /// Columns: A, B, C, D, E, F, DMAX.
    pub const QED: DesirabilityTable = DesirabilityTable {
        rows: [
            DesirabilityParams::new(2.817065973, 392.5754953, 290.7489764, 2.419764353, 49.22325677, 65.37051707, 104.9805561),
            DesirabilityParams::new(3.172690585, 137.8624751, 2.534937431, 4.581497897, 0.822739154, 0.576295591, 131.3186604),
            DesirabilityParams::new(2.948620388, 160.4605972, 3.615294657, 4.435986202, 0.290141953, 1.300669958, 148.7763046),
            DesirabilityParams::new(1.618662227, 1010.051101, 0.985094388, 0.000000001, 0.713820843, 0.920922555, 258.1632616),
            DesirabilityParams::new(1.876861559, 125.2232657, 62.90773554, 87.83366614, 12.01999824, 28.51324732, 104.5686167),
            DesirabilityParams::new(0.010000000, 272.4121427, 2.558379970, 1.565547684, 1.271567166, 2.758063707, 105.4420403),
            DesirabilityParams::new(3.217788970, 957.7374108, 2.274627939, 0.000000001, 1.317690384, 0.375760881, 312.3372610),
            DesirabilityParams::new(0.010000000, 1199.094025, -0.09002883, 0.000000001, 0.185904477, 0.875193782, 417.7253140),
        ],
    };

    #[inline]
    pub fn get(&self, property: Property) -> &DesirabilityParams {
        &self.rows[property.index()]
    }

    /// Returns a copy of this table with one row replaced.
    pub fn with_row(
        mut self,
        property: Property,
        params: DesirabilityParams,
    ) -> Result<Self, ParamLoadError> {
        Self::validate(property, &params)?;
        self.rows[property.index()] = params;
        Ok(self)
    }

    /// Loads a table from a TOML file with one `[LABEL]` section per overridden property.
    ///
    /// Sections may be named by label or alias (`[MW]`, `[tpsa]`, ...). Properties without
    /// a section keep their row from [`DesirabilityTable::QED`].
    pub fn load(path: &Path) -> Result<Self, ParamLoadError> {
        let path_str = path.to_string_lossy().to_string();
        let content = std::fs::read_to_string(path).map_err(|e| ParamLoadError::Io {
            path: path_str.clone(),
            source: e,
        })?;
        let sections: HashMap<String, DesirabilityParams> =
            toml::from_str(&content).map_err(|e| ParamLoadError::Toml {
                path: path_str.clone(),
                source: e,
            })?;

        let mut table = Self::QED;
        for (section, params) in sections {
            let property: Property =
                section
                    .parse()
                    .map_err(|_| ParamLoadError::UnknownProperty {
                        path: path_str.clone(),
                        section: section.clone(),
                    })?;
            debug!("Overriding desirability parameters for {}", property);
            table = table.with_row(property, params)?;
        }
        Ok(table)
    }

    fn validate(property: Property, params: &DesirabilityParams) -> Result<(), ParamLoadError> {
        if !params.is_finite() {
            return Err(ParamLoadError::NonFinite { property });
        }
        if params.dmax == 0.0 {
            return Err(ParamLoadError::ZeroDmax { property });
        }
        Ok(())
    }
}

impl Default for DesirabilityTable {
    fn default() -> Self {
        Self::QED
    }
}
