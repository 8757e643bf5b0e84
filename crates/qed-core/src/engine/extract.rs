use crate::core::catalog::{ACCEPTOR_SMARTS, ALIPHATIC_RING_SMARTS, STRUCTURAL_ALERT_SMARTS};
use crate::core::models::properties::PropertyVector;
use crate::engine::error::QedError;
use tracing::{debug, instrument};

/// Low-level cheminformatics operations supplied by an external toolkit.
///
/// Implementors own the molecule representation, SMARTS compilation, substructure search,
/// ring perception, and the empirical descriptor models. All methods are read-only.
pub trait ChemToolkit {
    /// The toolkit's molecule representation.
    type Molecule: ?Sized;

    /// A compiled substructure query.
    type Pattern;

    /// The error type for toolkit operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Compiles a SMARTS query.
    fn compile_pattern(&self, smarts: &str) -> Result<Self::Pattern, Self::Error>;

    /// Average molecular weight in Daltons.
    fn molecular_weight(&self, molecule: &Self::Molecule) -> Result<f64, Self::Error>;

    /// Octanol-water partition coefficient estimate.
    fn logp(&self, molecule: &Self::Molecule) -> Result<f64, Self::Error>;

    /// Topological polar surface area in square Angstroms.
    fn tpsa(&self, molecule: &Self::Molecule) -> Result<f64, Self::Error>;

    /// Number of hydrogen-bond donor atoms.
    fn hbond_donors(&self, molecule: &Self::Molecule) -> Result<usize, Self::Error>;

    /// Number of rotatable bonds.
    fn rotatable_bonds(&self, molecule: &Self::Molecule) -> Result<usize, Self::Error>;

    /// Number of distinct matches of `pattern` in `molecule`.
    fn count_matches(
        &self,
        molecule: &Self::Molecule,
        pattern: &Self::Pattern,
    ) -> Result<usize, Self::Error>;

    /// Whether `pattern` matches `molecule` at least once.
    fn has_match(
        &self,
        molecule: &Self::Molecule,
        pattern: &Self::Pattern,
    ) -> Result<bool, Self::Error> {
        Ok(self.count_matches(molecule, pattern)? > 0)
    }

    /// Size of the smallest set of smallest rings after deleting every atom matched by
    /// `pattern`. The input molecule is left untouched.
    fn ring_count_excluding(
        &self,
        molecule: &Self::Molecule,
        pattern: &Self::Pattern,
    ) -> Result<usize, Self::Error>;
}

/// Produces the eight QED properties of a molecule.
pub trait PropertyExtractor {
    type Molecule: ?Sized;

    fn extract(&self, molecule: &Self::Molecule) -> Result<PropertyVector, QedError>;
}

/// Extracts QED properties by applying the static pattern catalogs through a [`ChemToolkit`].
///
/// Every catalog pattern is compiled exactly once, in [`CatalogExtractor::new`].
pub struct CatalogExtractor<T: ChemToolkit> {
    toolkit: T,
    acceptors: Vec<T::Pattern>,
    alerts: Vec<T::Pattern>,
    aliphatic_rings: T::Pattern,
}

fn toolkit_error<E: std::error::Error + Send + Sync + 'static>(e: E) -> QedError {
    QedError::Toolkit(Box::new(e))
}

impl<T: ChemToolkit> CatalogExtractor<T> {
    pub fn new(toolkit: T) -> Result<Self, QedError> {
        let compile_all = |patterns: &[&'static str]| -> Result<Vec<T::Pattern>, QedError> {
            patterns
                .iter()
                .map(|&smarts| compile(&toolkit, smarts))
                .collect()
        };

        let acceptors = compile_all(&ACCEPTOR_SMARTS)?;
        let alerts = compile_all(&STRUCTURAL_ALERT_SMARTS)?;
        let aliphatic_rings = compile(&toolkit, ALIPHATIC_RING_SMARTS)?;
        debug!(
            "Compiled {} acceptor and {} structural alert patterns.",
            acceptors.len(),
            alerts.len()
        );

        Ok(Self {
            toolkit,
            acceptors,
            alerts,
            aliphatic_rings,
        })
    }

    pub fn toolkit(&self) -> &T {
        &self.toolkit
    }

    /// Total number of acceptor matches, summed over every acceptor pattern.
    pub fn acceptor_count(&self, molecule: &T::Molecule) -> Result<usize, QedError> {
        self.acceptors.iter().try_fold(0, |total, pattern| {
            let n = self
                .toolkit
                .count_matches(molecule, pattern)
                .map_err(toolkit_error)?;
            Ok(total + n)
        })
    }

    /// The structural alert patterns that match `molecule` at least once, in catalog order.
    pub fn matched_alerts(&self, molecule: &T::Molecule) -> Result<Vec<&'static str>, QedError> {
        let mut matched = Vec::new();
        for (pattern, &smarts) in self.alerts.iter().zip(STRUCTURAL_ALERT_SMARTS.iter()) {
            if self
                .toolkit
                .has_match(molecule, pattern)
                .map_err(toolkit_error)?
            {
                matched.push(smarts);
            }
        }
        Ok(matched)
    }

    /// Number of aromatic rings: rings that survive deletion of the aliphatic ring atoms.
    pub fn aromatic_ring_count(&self, molecule: &T::Molecule) -> Result<usize, QedError> {
        self.toolkit
            .ring_count_excluding(molecule, &self.aliphatic_rings)
            .map_err(toolkit_error)
    }
}

fn compile<T: ChemToolkit>(toolkit: &T, smarts: &'static str) -> Result<T::Pattern, QedError> {
    toolkit
        .compile_pattern(smarts)
        .map_err(|e| QedError::PatternCompilation {
            smarts,
            source: Box::new(e),
        })
}

impl<T: ChemToolkit> PropertyExtractor for CatalogExtractor<T> {
    type Molecule = T::Molecule;

    #[instrument(skip_all, name = "extract_properties")]
    fn extract(&self, molecule: &T::Molecule) -> Result<PropertyVector, QedError> {
        let tk = &self.toolkit;
        let mw = tk.molecular_weight(molecule).map_err(toolkit_error)?;
        let logp = tk.logp(molecule).map_err(toolkit_error)?;
        let hba = self.acceptor_count(molecule)?;
        let hbd = tk.hbond_donors(molecule).map_err(toolkit_error)?;
        let psa = tk.tpsa(molecule).map_err(toolkit_error)?;
        let rotb = tk.rotatable_bonds(molecule).map_err(toolkit_error)?;
        let arom = self.aromatic_ring_count(molecule)?;
        let alerts = self.matched_alerts(molecule)?.len();

        Ok(PropertyVector::new([
            mw,
            logp,
            hba as f64,
            hbd as f64,
            psa,
            rotb as f64,
            arom as f64,
            alerts as f64,
        ]))
    }
}
