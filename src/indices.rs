//! Index registry
//!
//! Symbolic name → position maps for the six categories of named model
//! objects. The maps are generated from a fixed list of economy-wide names
//! followed by per-sector names for sectors `1..=N`, so the same `N` always
//! yields the same maps. Positions are 0-based and contiguous.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// The six categories of indexed model objects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndexCategory {
    EndogenousStates,
    ExogenousShocks,
    ExpectedShocks,
    EquilibriumConditions,
    AugmentedStates,
    Observables,
}

impl IndexCategory {
    pub const ALL: [IndexCategory; 6] = [
        IndexCategory::EndogenousStates,
        IndexCategory::ExogenousShocks,
        IndexCategory::ExpectedShocks,
        IndexCategory::EquilibriumConditions,
        IndexCategory::AugmentedStates,
        IndexCategory::Observables,
    ];

    fn base_names(self) -> &'static [&'static str] {
        match self {
            IndexCategory::EndogenousStates => &[
                "y_t", "c_t", "i_t", "qk_t", "k_t", "kbar_t", "u_t", "rk_t", "Rktil_t", "n_t",
                "mc_t", "π_t", "μ_ω_t", "w_t", "L_t", "R_t", "g_t", "b_t", "μ_t", "z_t",
                "λ_f_t", "λ_w_t", "rm_t", "σ_ω_t", "μ_e_t", "γ_t", "π_star_t", "Ec_t", "Eqk_t",
                "Ei_t", "Eπ_t", "EL_t", "Erk_t", "Ew_t", "ERtil_k_t", "y_f_t", "c_f_t", "i_f_t",
                "qk_f_t", "k_f_t", "kbar_f_t", "u_f_t", "rk_f_t", "w_f_t", "L_f_t", "r_f_t",
                "Ec_f_t", "Eqk_f_t", "Ei_f_t", "EL_f_t", "ztil_t", "π_t1", "π_t2", "π_a_t",
                "R_t1", "zp_t", "Ez_t",
            ],
            IndexCategory::ExogenousShocks => &[
                "g_sh", "b_sh", "μ_sh", "z_sh", "λ_f_sh", "λ_w_sh", "rm_sh", "σ_ω_sh", "μ_e_sh",
                "γ_sh", "π_star_sh", "zp_sh", "lr_sh", "tfp_sh", "gdpdef_sh", "corepce_sh",
            ],
            IndexCategory::ExpectedShocks => &[
                "Ec_sh", "Eqk_sh", "Ei_sh", "Eπ_sh", "EL_sh", "Erk_sh", "Ew_sh", "ERktil_sh",
                "Ec_f_sh", "Eqk_f_sh", "Ei_f_sh", "EL_f_sh",
            ],
            IndexCategory::EquilibriumConditions => &[
                "eq_euler", "eq_inv", "eq_capval", "eq_spread", "eq_nevol", "eq_output",
                "eq_caputl", "eq_capsrv", "eq_capev", "eq_mkupp", "eq_phlps", "eq_caprnt",
                "eq_msub", "eq_wage", "eq_mp", "eq_res", "eq_g", "eq_b", "eq_μ", "eq_z",
                "eq_λ_f", "eq_λ_w", "eq_rm", "eq_σ_ω", "eq_μ_e", "eq_γ", "eq_λ_f1", "eq_λ_w1",
                "eq_Ec", "eq_Eqk", "eq_Ei", "eq_Eπ", "eq_EL", "eq_Erk", "eq_Ew", "eq_ERktil",
                "eq_euler_f", "eq_inv_f", "eq_capval_f", "eq_output_f", "eq_caputl_f",
                "eq_capsrv_f", "eq_capev_f", "eq_mkupp_f", "eq_caprnt_f", "eq_msub_f",
                "eq_res_f", "eq_Ec_f", "eq_Eqk_f", "eq_Ei_f", "eq_EL_f", "eq_ztil",
                "eq_π_star", "eq_π1", "eq_π2", "eq_π_a", "eq_Rt1", "eq_zp", "eq_Ez",
            ],
            IndexCategory::AugmentedStates => &[
                "y_t1", "c_t1", "i_t1", "w_t1", "π_t1_dup", "L_t1", "Et_π_t", "e_lr_t",
                "e_tfp_t", "e_gdpdef_t", "e_corepce_t", "u_t1",
            ],
            IndexCategory::Observables => &[
                "obs_gdp", "obs_hours", "obs_wages", "obs_gdpdeflator", "obs_corepce",
                "obs_nominalrate", "obs_consumption", "obs_investment", "obs_spread",
                "obs_longinflation", "obs_longrate", "obs_tfp",
            ],
        }
    }

    /// `(prefix, suffix)` pairs; each pair contributes one name per sector
    fn sector_rules(self) -> &'static [(&'static str, &'static str)] {
        match self {
            IndexCategory::EndogenousStates => &[
                ("y_", "_t"),
                ("k_", "_t"),
                ("L_", "_t"),
                ("mc_", "_t"),
                ("π_", "_t"),
            ],
            IndexCategory::ExogenousShocks => &[("z_", "_sh")],
            IndexCategory::ExpectedShocks => &[],
            IndexCategory::EquilibriumConditions => &[
                ("eq_output_", ""),
                ("eq_capital_", ""),
                ("eq_labor_", ""),
                ("eq_mc_", ""),
                ("eq_phillips_", ""),
            ],
            IndexCategory::AugmentedStates => &[("y_", "_t1")],
            IndexCategory::Observables => &[("obs_output_", "")],
        }
    }

    /// Number of entries for `n_sectors` sectors
    pub fn size(self, n_sectors: usize) -> usize {
        self.base_names().len() + self.sector_rules().len() * n_sectors
    }
}

impl fmt::Display for IndexCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IndexCategory::EndogenousStates => "endogenous states",
            IndexCategory::ExogenousShocks => "exogenous shocks",
            IndexCategory::ExpectedShocks => "expected shocks",
            IndexCategory::EquilibriumConditions => "equilibrium conditions",
            IndexCategory::AugmentedStates => "augmented states",
            IndexCategory::Observables => "observables",
        };
        f.write_str(name)
    }
}

/// Name of the per-sector entry for `sector` (1-based)
pub fn sector_name(prefix: &str, sector: usize, suffix: &str) -> String {
    format!("{}{}{}", prefix, sector, suffix)
}

/// A single category's ordered names and their positions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexMap {
    names: Vec<String>,
    positions: HashMap<String, usize>,
}

impl IndexMap {
    fn from_names(names: Vec<String>) -> Self {
        let positions = names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();
        Self { names, positions }
    }

    pub fn get(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in position order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// `(name, position)` pairs in position order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.names.iter().enumerate().map(|(i, n)| (n.as_str(), i))
    }
}

/// All six index maps for one model instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexRegistry {
    n_sectors: usize,
    maps: HashMap<IndexCategory, IndexMap>,
}

impl IndexRegistry {
    /// Build every index map for `n_sectors` sectors
    ///
    /// # Errors
    ///
    /// `InvalidDimension` if `n_sectors < 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsge_core::indices::{IndexCategory, IndexRegistry};
    ///
    /// let indices = IndexRegistry::build(2).unwrap();
    /// assert!(indices.get(IndexCategory::EndogenousStates, "y_2_t").is_some());
    /// assert!(IndexRegistry::build(0).is_err());
    /// ```
    pub fn build(n_sectors: i64) -> Result<Self> {
        if n_sectors < 1 {
            return Err(ModelError::InvalidDimension(n_sectors));
        }
        let n = n_sectors as usize;

        let maps = IndexCategory::ALL
            .iter()
            .map(|&category| {
                let mut names: Vec<String> =
                    category.base_names().iter().map(|s| s.to_string()).collect();
                for sector in 1..=n {
                    for (prefix, suffix) in category.sector_rules() {
                        names.push(sector_name(prefix, sector, suffix));
                    }
                }
                (category, IndexMap::from_names(names))
            })
            .collect();

        Ok(Self { n_sectors: n, maps })
    }

    pub fn n_sectors(&self) -> usize {
        self.n_sectors
    }

    /// The full map for one category
    pub fn map(&self, category: IndexCategory) -> &IndexMap {
        // Every category is inserted by `build`.
        &self.maps[&category]
    }

    pub fn get(&self, category: IndexCategory, name: &str) -> Option<usize> {
        self.map(category).get(name)
    }

    /// Position of `name` in `category`, or `UnknownIndex`
    pub fn index(&self, category: IndexCategory, name: &str) -> Result<usize> {
        self.get(category, name).ok_or_else(|| ModelError::UnknownIndex {
            category: category.to_string(),
            name: name.to_string(),
        })
    }

    /// Number of entries in `category`
    pub fn len(&self, category: IndexCategory) -> usize {
        self.map(category).len()
    }
}
