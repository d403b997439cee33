//! Release search filter.
//!
//! A filter is a list of tagged criteria combined with logical AND. Adapters
//! either evaluate it directly with [`ReleaseFilter::matches`] or translate
//! [`ReleaseFilter::criteria`] into their own query language.

use chrono::NaiveDate;

use super::aggregate::Release;
use super::status::ReleaseStatus;

/// A single search constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Criterion {
    /// Case-insensitive substring of the name. Stored lowercased.
    NameContains(String),
    /// Case-insensitive substring of the description. Stored lowercased.
    DescriptionContains(String),
    /// Exact status.
    StatusIs(ReleaseStatus),
    /// `release_date >= date`.
    ReleasedOnOrAfter(NaiveDate),
    /// `release_date <= date`.
    ReleasedOnOrBefore(NaiveDate),
}

impl Criterion {
    /// Evaluates this criterion against a release.
    pub fn matches(&self, release: &Release) -> bool {
        match self {
            Criterion::NameContains(needle) => release.name().to_lowercase().contains(needle),
            Criterion::DescriptionContains(needle) => release
                .description()
                .map(|description| description.to_lowercase().contains(needle))
                .unwrap_or(false),
            Criterion::StatusIs(status) => release.status() == *status,
            Criterion::ReleasedOnOrAfter(date) => release.release_date() >= *date,
            Criterion::ReleasedOnOrBefore(date) => release.release_date() <= *date,
        }
    }
}

/// Conjunction of zero or more criteria. An empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseFilter {
    criteria: Vec<Criterion>,
}

impl ReleaseFilter {
    /// Filter with no constraints.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn builder() -> ReleaseFilterBuilder {
        ReleaseFilterBuilder::default()
    }

    /// The criteria, in the order they were added.
    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    /// True when every criterion holds for `release`.
    pub fn matches(&self, release: &Release) -> bool {
        self.criteria.iter().all(|criterion| criterion.matches(release))
    }
}

/// Builder appending only the criteria that are actually present.
#[derive(Debug, Clone, Default)]
pub struct ReleaseFilterBuilder {
    criteria: Vec<Criterion>,
}

impl ReleaseFilterBuilder {
    /// Name substring; absent or blank text adds nothing.
    pub fn name(mut self, name: Option<&str>) -> Self {
        if let Some(needle) = non_blank_lowercase(name) {
            self.criteria.push(Criterion::NameContains(needle));
        }
        self
    }

    /// Description substring; absent or blank text adds nothing.
    pub fn description(mut self, description: Option<&str>) -> Self {
        if let Some(needle) = non_blank_lowercase(description) {
            self.criteria.push(Criterion::DescriptionContains(needle));
        }
        self
    }

    pub fn status(mut self, status: Option<ReleaseStatus>) -> Self {
        if let Some(status) = status {
            self.criteria.push(Criterion::StatusIs(status));
        }
        self
    }

    /// Inclusive lower bound on the release date.
    pub fn from_date(mut self, date: Option<NaiveDate>) -> Self {
        if let Some(date) = date {
            self.criteria.push(Criterion::ReleasedOnOrAfter(date));
        }
        self
    }

    /// Inclusive upper bound on the release date.
    pub fn to_date(mut self, date: Option<NaiveDate>) -> Self {
        if let Some(date) = date {
            self.criteria.push(Criterion::ReleasedOnOrBefore(date));
        }
        self
    }

    pub fn build(self) -> ReleaseFilter {
        ReleaseFilter {
            criteria: self.criteria,
        }
    }
}

fn non_blank_lowercase(text: Option<&str>) -> Option<String> {
    text.filter(|t| !t.trim().is_empty()).map(str::to_lowercase)
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::domain::foundation::{ReleaseId, Timestamp};
    use proptest::prelude::*;

    fn any_status() -> impl Strategy<Value = ReleaseStatus> {
        proptest::sample::select(ReleaseStatus::ALL.to_vec())
    }

    fn any_date() -> impl Strategy<Value = NaiveDate> {
        (1u32..=12, 1u32..=28).prop_map(|(m, d)| NaiveDate::from_ymd_opt(2026, m, d).unwrap())
    }

    fn any_release() -> impl Strategy<Value = Release> {
        (
            1i64..1000,
            "[a-cA-C ]{1,8}",
            proptest::option::of("[a-cA-C ]{0,8}"),
            any_status(),
            any_date(),
        )
            .prop_map(|(id, name, description, status, date)| {
                let now = Timestamp::now();
                Release::reconstitute(
                    ReleaseId::new(id),
                    name,
                    description,
                    status,
                    date,
                    now,
                    now,
                )
            })
    }

    fn any_criterion() -> impl Strategy<Value = Criterion> {
        prop_oneof![
            "[abc]{1,2}".prop_map(Criterion::NameContains),
            "[abc]{1,2}".prop_map(Criterion::DescriptionContains),
            any_status().prop_map(Criterion::StatusIs),
            any_date().prop_map(Criterion::ReleasedOnOrAfter),
            any_date().prop_map(Criterion::ReleasedOnOrBefore),
        ]
    }

    fn single(criterion: Criterion) -> ReleaseFilter {
        ReleaseFilter {
            criteria: vec![criterion],
        }
    }

    proptest! {
        /// Property: combining two criteria returns the intersection of each alone
        #[test]
        fn conjunction_is_intersection(
            releases in proptest::collection::vec(any_release(), 0..20),
            a in any_criterion(),
            b in any_criterion(),
        ) {
            let both = ReleaseFilter { criteria: vec![a.clone(), b.clone()] };
            let only_a = single(a);
            let only_b = single(b);

            for release in &releases {
                prop_assert_eq!(
                    both.matches(release),
                    only_a.matches(release) && only_b.matches(release)
                );
            }
        }

        /// Property: the empty filter accepts every release
        #[test]
        fn empty_filter_accepts_all(release in any_release()) {
            prop_assert!(ReleaseFilter::all().matches(&release));
        }
    }
}
