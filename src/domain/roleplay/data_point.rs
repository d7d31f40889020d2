//! Disclosed-data flags.
//!
//! A data point is a category of information the salesperson can put on
//! the table. `DisclosedData` is the fixed-shape record of which ones
//! have come up so far.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// A category of information disclosed during the pitch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataPoint {
    Cost,
    Roi,
    CaseStudy,
    TimeRequired,
    SupportOffered,
}

impl DataPoint {
    /// All data points, in scoring order.
    pub const ALL: [DataPoint; 5] = [
        DataPoint::Cost,
        DataPoint::Roi,
        DataPoint::CaseStudy,
        DataPoint::TimeRequired,
        DataPoint::SupportOffered,
    ];

    /// Machine-readable key, matching the serialized form.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Cost => "cost",
            Self::Roi => "roi",
            Self::CaseStudy => "case_study",
            Self::TimeRequired => "time_required",
            Self::SupportOffered => "support_offered",
        }
    }

    /// Japanese label used in prompts and reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cost => "具体的な費用",
            Self::Roi => "費用対効果",
            Self::CaseStudy => "導入事例",
            Self::TimeRequired => "所要期間",
            Self::SupportOffered => "サポート内容",
        }
    }
}

impl fmt::Display for DataPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for DataPoint {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DataPoint::ALL
            .into_iter()
            .find(|point| point.key() == s)
            .ok_or_else(|| {
                ValidationError::invalid_format("data_point", format!("unknown key '{}'", s))
            })
    }
}

/// Which data points have been disclosed. All start out false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DisclosedData {
    pub cost: bool,
    pub roi: bool,
    pub case_study: bool,
    pub time_required: bool,
    pub support_offered: bool,
}

impl DisclosedData {
    /// Returns whether the given data point has been disclosed.
    pub fn get(&self, point: DataPoint) -> bool {
        match point {
            DataPoint::Cost => self.cost,
            DataPoint::Roi => self.roi,
            DataPoint::CaseStudy => self.case_study,
            DataPoint::TimeRequired => self.time_required,
            DataPoint::SupportOffered => self.support_offered,
        }
    }

    /// Marks the given data point as disclosed.
    pub fn mark(&mut self, point: DataPoint) {
        let flag = match point {
            DataPoint::Cost => &mut self.cost,
            DataPoint::Roi => &mut self.roi,
            DataPoint::CaseStudy => &mut self.case_study,
            DataPoint::TimeRequired => &mut self.time_required,
            DataPoint::SupportOffered => &mut self.support_offered,
        };
        *flag = true;
    }

    /// Disclosed data points, in scoring order.
    pub fn provided(&self) -> Vec<DataPoint> {
        DataPoint::ALL
            .into_iter()
            .filter(|point| self.get(*point))
            .collect()
    }

    /// Data points not yet disclosed, in scoring order.
    pub fn missing(&self) -> Vec<DataPoint> {
        DataPoint::ALL
            .into_iter()
            .filter(|point| !self.get(*point))
            .collect()
    }

    /// Number of disclosed data points.
    pub fn count(&self) -> usize {
        self.provided().len()
    }
}
