//! Analytics engine - Pure monthly metrics over the in-memory collections.
//!
//! Every function here takes read-only slices plus an optional area filter
//! and a reference month (any date within the target calendar month), and
//! returns structured data for the caller to render or export. The engine is
//! total: all inputs are already-validated rows, every division is
//! zero-guarded, and nothing here performs I/O or can fail.
//!
//! Month membership is a structured year+month comparison on real calendar
//! dates, never a string-prefix match.

use crate::entities::{BookingStatus, PropertyType, area, booking, property};
use chrono::{Datelike, Months, NaiveDate};
use std::collections::HashSet;

/// Summary metrics for one calendar month under one city filter.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySummary {
    /// Sum of nightly prices over booked nights
    pub total_revenue: f64,
    /// Number of properties under the filter
    pub total_properties: usize,
    /// Booked nights / (properties x days in month), as a percentage
    pub average_occupancy_rate: f64,
    /// Revenue / booked nights; 0 when no nights were booked
    pub average_daily_rate: f64,
    /// Reserved; the metric is disabled and this is always 0
    pub rev_par: f64,
    /// Count of booked nights in the month
    pub total_booked_nights: usize,
    /// Relative revenue change versus the preceding month, as a percentage.
    /// 0 whenever the prior month had no revenue, even if this month does.
    pub month_over_month_growth: f64,
    /// Bookings are single-night rows, so this is fixed at 1
    pub average_length_of_stay: f64,
    /// Distinct properties with at least one booked night
    pub properties_with_bookings: usize,
}

/// Per-city metrics for cross-city comparison charts.
#[derive(Debug, Clone, PartialEq)]
pub struct CityMetrics {
    /// Area primary key (chart clicks navigate by this)
    pub city_id: i64,
    /// Area display name
    pub city_name: String,
    /// Booked revenue for the month
    pub revenue: f64,
    /// Number of properties in the area
    pub properties: usize,
    /// Fill rate for the month, as a percentage
    pub occupancy_rate: f64,
    /// Revenue / booked nights; 0 when no nights were booked
    pub average_daily_rate: f64,
    /// Count of booked nights in the month
    pub booked_nights: usize,
}

/// One month of the 12-month revenue trend.
#[derive(Debug, Clone, PartialEq)]
pub struct RevenuePoint {
    /// Human-readable month label, e.g. "Mar 2024"
    pub month: String,
    /// Booked revenue for that month
    pub revenue: f64,
}

/// One day of the occupancy heatmap.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapDay {
    /// Day of month, 1-based
    pub day: u32,
    /// Full calendar date of the day
    pub date: NaiveDate,
    /// Booked properties / total properties, as a percentage
    pub occupancy_rate: f64,
    /// Properties with a booked night on this date
    pub booked_properties: usize,
    /// Properties under the filter
    pub total_properties: usize,
}

/// One row of the property performance table.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyPerformance {
    /// Property primary key
    pub property_id: i64,
    /// Property display name
    pub name: String,
    /// Bedroom count, shown alongside the name
    pub bedrooms: i32,
    /// Listing tier
    pub property_type: PropertyType,
    /// Optional external listing URL
    pub airbnb_link: Option<String>,
    /// Booked revenue for the month
    pub revenue: f64,
    /// Count of booked nights in the month
    pub booked_nights: usize,
    /// Booked nights / days in month, as a percentage
    pub occupancy_rate: f64,
    /// Revenue / booked nights; 0 when no nights were booked
    pub average_rate: f64,
}

/// Sortable columns of the property performance table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Sort by monthly revenue
    Revenue,
    /// Sort by occupancy rate
    Occupancy,
    /// Sort by average nightly rate
    Rate,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest first
    Asc,
    /// Largest first
    Desc,
}

/// Active sort column and direction, with header-click toggling semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    /// Column currently sorted by
    pub key: SortKey,
    /// Current direction
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            key: SortKey::Revenue,
            direction: SortDirection::Desc,
        }
    }
}

impl SortState {
    /// Applies a header click: the active column flips direction, a new
    /// column becomes active at descending order.
    #[must_use]
    pub fn toggle(self, clicked: SortKey) -> Self {
        if self.key == clicked {
            let direction = match self.direction {
                SortDirection::Asc => SortDirection::Desc,
                SortDirection::Desc => SortDirection::Asc,
            };
            Self {
                key: self.key,
                direction,
            }
        } else {
            Self {
                key: clicked,
                direction: SortDirection::Desc,
            }
        }
    }
}

/// First day of the month containing `date`.
fn first_of_month(date: NaiveDate) -> NaiveDate {
    // Day 1 exists in every month
    date.with_day(1).unwrap_or(date)
}

/// Number of days in the month containing `date` (28-31).
#[must_use]
pub fn days_in_month(date: NaiveDate) -> u32 {
    let first = first_of_month(date);
    let next = first + Months::new(1);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let days = next.signed_duration_since(first).num_days() as u32;
    days
}

/// The first of the month `n` months before the one containing `date`.
fn months_back(date: NaiveDate, n: u32) -> NaiveDate {
    first_of_month(date) - Months::new(n)
}

/// Whether `date` falls in the same calendar month as `month`.
fn in_month(date: NaiveDate, month: NaiveDate) -> bool {
    date.year() == month.year() && date.month() == month.month()
}

/// IDs of the properties matching the city filter (all when `None`).
fn selected_property_ids(properties: &[property::Model], area_filter: Option<i64>) -> Vec<i64> {
    properties
        .iter()
        .filter(|p| area_filter.is_none_or(|id| p.area_id == id))
        .map(|p| p.id)
        .collect()
}

/// Booked rows of the given properties within the given month.
fn booked_in_month<'a>(
    bookings: &'a [booking::Model],
    property_ids: &'a [i64],
    month: NaiveDate,
) -> impl Iterator<Item = &'a booking::Model> {
    bookings.iter().filter(move |b| {
        b.status == BookingStatus::Booked
            && in_month(b.date, month)
            && property_ids.contains(&b.property_id)
    })
}

/// Booked revenue for the given properties within the given month.
fn month_revenue(bookings: &[booking::Model], property_ids: &[i64], month: NaiveDate) -> f64 {
    booked_in_month(bookings, property_ids, month)
        .map(|b| b.price)
        .sum()
}

#[allow(clippy::cast_precision_loss)]
fn percentage(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        (numerator as f64 / denominator as f64) * 100.0
    }
}

#[allow(clippy::cast_precision_loss)]
fn rate(revenue: f64, nights: usize) -> f64 {
    if nights == 0 { 0.0 } else { revenue / nights as f64 }
}

/// Computes the monthly summary for the reference month under the filter.
#[must_use]
pub fn monthly_summary(
    properties: &[property::Model],
    bookings: &[booking::Model],
    area_filter: Option<i64>,
    month: NaiveDate,
) -> MonthlySummary {
    let property_ids = selected_property_ids(properties, area_filter);
    let days = days_in_month(month) as usize;

    let month_booked: Vec<&booking::Model> =
        booked_in_month(bookings, &property_ids, month).collect();
    let total_revenue: f64 = month_booked.iter().map(|b| b.price).sum();
    let total_booked_nights = month_booked.len();
    let total_properties = property_ids.len();

    let average_occupancy_rate = percentage(total_booked_nights, total_properties * days);
    let average_daily_rate = rate(total_revenue, total_booked_nights);

    let previous_revenue = month_revenue(bookings, &property_ids, months_back(month, 1));
    let month_over_month_growth = if previous_revenue > 0.0 {
        (total_revenue - previous_revenue) / previous_revenue * 100.0
    } else {
        0.0
    };

    let properties_with_bookings = month_booked
        .iter()
        .map(|b| b.property_id)
        .collect::<HashSet<_>>()
        .len();

    MonthlySummary {
        total_revenue,
        total_properties,
        average_occupancy_rate,
        average_daily_rate,
        rev_par: 0.0,
        total_booked_nights,
        month_over_month_growth,
        average_length_of_stay: 1.0,
        properties_with_bookings,
    }
}

/// Computes per-city metrics for every area, in the input collection's
/// order, ignoring any single-city filter.
#[must_use]
pub fn city_comparison(
    areas: &[area::Model],
    properties: &[property::Model],
    bookings: &[booking::Model],
    month: NaiveDate,
) -> Vec<CityMetrics> {
    let days = days_in_month(month) as usize;

    areas
        .iter()
        .map(|city| {
            let property_ids = selected_property_ids(properties, Some(city.id));
            let booked: Vec<&booking::Model> =
                booked_in_month(bookings, &property_ids, month).collect();
            let revenue: f64 = booked.iter().map(|b| b.price).sum();
            let booked_nights = booked.len();

            CityMetrics {
                city_id: city.id,
                city_name: city.name.clone(),
                revenue,
                properties: property_ids.len(),
                occupancy_rate: percentage(booked_nights, property_ids.len() * days),
                average_daily_rate: rate(revenue, booked_nights),
                booked_nights,
            }
        })
        .collect()
}

/// Builds the 12-month revenue trend ending at the reference month.
///
/// Always exactly 12 points; months with no bookings yield 0. Each month's
/// revenue is computed independently - no incremental reuse, which is fine
/// at single-operator data volumes.
#[must_use]
pub fn revenue_trend(
    properties: &[property::Model],
    bookings: &[booking::Model],
    area_filter: Option<i64>,
    month: NaiveDate,
) -> Vec<RevenuePoint> {
    let property_ids = selected_property_ids(properties, area_filter);

    (0..12)
        .rev()
        .map(|offset| {
            let point_month = months_back(month, offset);
            RevenuePoint {
                month: point_month.format("%b %Y").to_string(),
                revenue: month_revenue(bookings, &property_ids, point_month),
            }
        })
        .collect()
}

/// Builds the daily occupancy series for the reference month.
///
/// One entry per day of the month (28-31); recomputed fresh per call.
#[must_use]
pub fn occupancy_heatmap(
    properties: &[property::Model],
    bookings: &[booking::Model],
    area_filter: Option<i64>,
    month: NaiveDate,
) -> Vec<HeatmapDay> {
    let property_ids = selected_property_ids(properties, area_filter);
    let total_properties = property_ids.len();
    let first = first_of_month(month);

    (1..=days_in_month(month))
        .map(|day| {
            let date = first + chrono::Days::new(u64::from(day - 1));
            let booked_properties = bookings
                .iter()
                .filter(|b| {
                    b.status == BookingStatus::Booked
                        && b.date == date
                        && property_ids.contains(&b.property_id)
                })
                .count();

            HeatmapDay {
                day,
                date,
                occupancy_rate: percentage(booked_properties, total_properties),
                booked_properties,
                total_properties,
            }
        })
        .collect()
}

/// Computes the per-property performance rows for the reference month.
#[must_use]
pub fn property_performance(
    properties: &[property::Model],
    bookings: &[booking::Model],
    area_filter: Option<i64>,
    month: NaiveDate,
) -> Vec<PropertyPerformance> {
    let days = days_in_month(month) as usize;

    properties
        .iter()
        .filter(|p| area_filter.is_none_or(|id| p.area_id == id))
        .map(|p| {
            let booked: Vec<&booking::Model> = bookings
                .iter()
                .filter(|b| {
                    b.status == BookingStatus::Booked
                        && b.property_id == p.id
                        && in_month(b.date, month)
                })
                .collect();
            let revenue: f64 = booked.iter().map(|b| b.price).sum();
            let booked_nights = booked.len();

            PropertyPerformance {
                property_id: p.id,
                name: p.name.clone(),
                bedrooms: p.bedrooms,
                property_type: p.property_type,
                airbnb_link: p.airbnb_link.clone(),
                revenue,
                booked_nights,
                occupancy_rate: percentage(booked_nights, days),
                average_rate: rate(revenue, booked_nights),
            }
        })
        .collect()
}

/// Sorts performance rows in place per the given sort state.
///
/// Equal keys keep no particular order; ties are cosmetic here.
pub fn sort_performance(rows: &mut [PropertyPerformance], state: SortState) {
    let value = |row: &PropertyPerformance| match state.key {
        SortKey::Revenue => row.revenue,
        SortKey::Occupancy => row.occupancy_rate,
        SortKey::Rate => row.average_rate,
    };
    rows.sort_by(|a, b| match state.direction {
        SortDirection::Asc => value(a).total_cmp(&value(b)),
        SortDirection::Desc => value(b).total_cmp(&value(a)),
    });
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use chrono::Utc;

    fn city(id: i64, name: &str) -> area::Model {
        area::Model {
            id,
            name: name.to_string(),
            description: None,
            image_url: None,
            created_at: Utc::now(),
        }
    }

    fn unit(id: i64, area_id: i64, name: &str, avg_price: f64) -> property::Model {
        property::Model {
            id,
            area_id,
            name: name.to_string(),
            airbnb_link: None,
            avg_price_per_day: avg_price,
            description: None,
            bedrooms: 2,
            property_type: PropertyType::Normal,
            is_superhost: false,
            created_at: Utc::now(),
        }
    }

    fn night(
        id: i64,
        property_id: i64,
        date: NaiveDate,
        status: BookingStatus,
        price: f64,
    ) -> booking::Model {
        booking::Model {
            id,
            property_id,
            date,
            status,
            price,
            notes: None,
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Two Goa properties at a Rs 3000 default; A booked 5 nights in March
    /// 2024, B none.
    fn goa_fixture() -> (Vec<area::Model>, Vec<property::Model>, Vec<booking::Model>) {
        let areas = vec![city(1, "Goa")];
        let properties = vec![unit(10, 1, "Villa A", 3000.0), unit(11, 1, "Villa B", 3000.0)];
        let bookings = (5..10)
            .map(|d| night(i64::from(d), 10, day(2024, 3, d), BookingStatus::Booked, 3000.0))
            .collect();
        (areas, properties, bookings)
    }

    #[test]
    fn test_monthly_summary_goa_scenario() {
        let (_areas, properties, bookings) = goa_fixture();

        let summary = monthly_summary(&properties, &bookings, Some(1), day(2024, 3, 1));

        assert_eq!(summary.total_revenue, 15000.0);
        assert_eq!(summary.total_booked_nights, 5);
        assert_eq!(summary.total_properties, 2);
        assert!((summary.average_occupancy_rate - (5.0 / 62.0) * 100.0).abs() < 1e-9);
        assert_eq!(summary.average_daily_rate, 3000.0);
        assert_eq!(summary.properties_with_bookings, 1);
        assert_eq!(summary.rev_par, 0.0);
        assert_eq!(summary.average_length_of_stay, 1.0);
    }

    #[test]
    fn test_monthly_summary_empty_inputs() {
        let summary = monthly_summary(&[], &[], None, day(2024, 3, 1));

        assert_eq!(summary.total_revenue, 0.0);
        assert_eq!(summary.total_properties, 0);
        assert_eq!(summary.average_occupancy_rate, 0.0);
        assert_eq!(summary.average_daily_rate, 0.0);
        assert_eq!(summary.month_over_month_growth, 0.0);
        assert_eq!(summary.properties_with_bookings, 0);
    }

    #[test]
    fn test_average_daily_rate_reconstructs_revenue() {
        let (_areas, properties, bookings) = goa_fixture();

        let summary = monthly_summary(&properties, &bookings, Some(1), day(2024, 3, 15));

        #[allow(clippy::cast_precision_loss)]
        let reconstructed = summary.average_daily_rate * summary.total_booked_nights as f64;
        assert_eq!(reconstructed, summary.total_revenue);
    }

    #[test]
    fn test_occupancy_bounded_by_100() {
        let properties = vec![unit(1, 1, "Full House", 1000.0)];
        // Every day of April booked
        let bookings: Vec<booking::Model> = (1..=30)
            .map(|d| night(i64::from(d), 1, day(2024, 4, d), BookingStatus::Booked, 1000.0))
            .collect();

        let summary = monthly_summary(&properties, &bookings, None, day(2024, 4, 1));
        assert_eq!(summary.average_occupancy_rate, 100.0);
    }

    #[test]
    fn test_growth_zero_when_previous_month_empty() {
        let (_areas, properties, bookings) = goa_fixture();

        // February 2024 had no revenue, so March growth is 0 despite Rs 15000
        let summary = monthly_summary(&properties, &bookings, Some(1), day(2024, 3, 1));
        assert_eq!(summary.month_over_month_growth, 0.0);
    }

    #[test]
    fn test_growth_computed_from_previous_month() {
        let properties = vec![unit(1, 1, "Villa", 1000.0)];
        let bookings = vec![
            night(1, 1, day(2024, 2, 10), BookingStatus::Booked, 1000.0),
            night(2, 1, day(2024, 3, 10), BookingStatus::Booked, 1500.0),
        ];

        let summary = monthly_summary(&properties, &bookings, None, day(2024, 3, 1));
        assert_eq!(summary.month_over_month_growth, 50.0);
    }

    #[test]
    fn test_available_and_blocked_rows_earn_nothing() {
        let properties = vec![unit(1, 1, "Villa", 1000.0)];
        let bookings = vec![
            night(1, 1, day(2024, 3, 1), BookingStatus::Available, 2500.0),
            night(2, 1, day(2024, 3, 2), BookingStatus::Blocked, 2500.0),
            night(3, 1, day(2024, 3, 3), BookingStatus::Booked, 2500.0),
        ];

        let summary = monthly_summary(&properties, &bookings, None, day(2024, 3, 1));
        assert_eq!(summary.total_revenue, 2500.0);
        assert_eq!(summary.total_booked_nights, 1);
    }

    #[test]
    fn test_city_filter_excludes_other_areas() {
        let properties = vec![unit(1, 1, "Goa Villa", 1000.0), unit(2, 2, "Jaipur Haveli", 1000.0)];
        let bookings = vec![
            night(1, 1, day(2024, 3, 1), BookingStatus::Booked, 1000.0),
            night(2, 2, day(2024, 3, 1), BookingStatus::Booked, 4000.0),
        ];

        let goa_only = monthly_summary(&properties, &bookings, Some(1), day(2024, 3, 1));
        assert_eq!(goa_only.total_revenue, 1000.0);
        assert_eq!(goa_only.total_properties, 1);

        let all = monthly_summary(&properties, &bookings, None, day(2024, 3, 1));
        assert_eq!(all.total_revenue, 5000.0);
    }

    #[test]
    fn test_month_match_is_calendar_not_lexical() {
        let properties = vec![unit(1, 1, "Villa", 1000.0)];
        let bookings = vec![
            night(1, 1, day(2024, 3, 31), BookingStatus::Booked, 1000.0),
            night(2, 1, day(2024, 4, 1), BookingStatus::Booked, 9000.0),
            night(3, 1, day(2023, 3, 15), BookingStatus::Booked, 500.0),
        ];

        let summary = monthly_summary(&properties, &bookings, None, day(2024, 3, 10));
        // Only the 2024-03 night counts; adjacent month and prior year do not
        assert_eq!(summary.total_revenue, 1000.0);
        assert_eq!(summary.total_booked_nights, 1);
    }

    #[test]
    fn test_city_comparison_order_and_values() {
        let areas = vec![city(2, "Jaipur"), city(1, "Goa")];
        let properties = vec![unit(1, 1, "Goa Villa", 1000.0), unit(2, 2, "Haveli", 1000.0)];
        let bookings = vec![
            night(1, 1, day(2024, 3, 1), BookingStatus::Booked, 1200.0),
            night(2, 1, day(2024, 3, 2), BookingStatus::Booked, 1800.0),
        ];

        let comparison = city_comparison(&areas, &properties, &bookings, day(2024, 3, 1));

        // Input order preserved
        assert_eq!(comparison.len(), 2);
        assert_eq!(comparison[0].city_name, "Jaipur");
        assert_eq!(comparison[1].city_name, "Goa");

        assert_eq!(comparison[0].revenue, 0.0);
        assert_eq!(comparison[0].booked_nights, 0);
        assert_eq!(comparison[0].average_daily_rate, 0.0);

        assert_eq!(comparison[1].revenue, 3000.0);
        assert_eq!(comparison[1].booked_nights, 2);
        assert_eq!(comparison[1].average_daily_rate, 1500.0);
        assert!((comparison[1].occupancy_rate - (2.0 / 31.0) * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_revenue_trend_always_twelve_points() {
        let trend = revenue_trend(&[], &[], None, day(2024, 3, 15));
        assert_eq!(trend.len(), 12);
        assert!(trend.iter().all(|p| p.revenue == 0.0));
        assert_eq!(trend[0].month, "Apr 2023");
        assert_eq!(trend[11].month, "Mar 2024");
    }

    #[test]
    fn test_revenue_trend_last_point_matches_summary() {
        let (_areas, properties, bookings) = goa_fixture();
        let month = day(2024, 3, 20);

        let trend = revenue_trend(&properties, &bookings, Some(1), month);
        let summary = monthly_summary(&properties, &bookings, Some(1), month);

        assert_eq!(trend.len(), 12);
        assert_eq!(trend[11].revenue, summary.total_revenue);
    }

    #[test]
    fn test_revenue_trend_places_past_months() {
        let properties = vec![unit(1, 1, "Villa", 1000.0)];
        let bookings = vec![
            night(1, 1, day(2023, 11, 5), BookingStatus::Booked, 700.0),
            night(2, 1, day(2024, 3, 5), BookingStatus::Booked, 1300.0),
        ];

        let trend = revenue_trend(&properties, &bookings, None, day(2024, 3, 1));
        // Nov 2023 is 4 months back from Mar 2024 -> index 7
        assert_eq!(trend[7].month, "Nov 2023");
        assert_eq!(trend[7].revenue, 700.0);
        assert_eq!(trend[11].revenue, 1300.0);
    }

    #[test]
    fn test_heatmap_length_follows_calendar() {
        assert_eq!(occupancy_heatmap(&[], &[], None, day(2024, 2, 1)).len(), 29);
        assert_eq!(occupancy_heatmap(&[], &[], None, day(2023, 2, 1)).len(), 28);
        assert_eq!(occupancy_heatmap(&[], &[], None, day(2024, 4, 1)).len(), 30);
        assert_eq!(occupancy_heatmap(&[], &[], None, day(2024, 3, 1)).len(), 31);
    }

    #[test]
    fn test_heatmap_rates_and_counts() {
        let properties = vec![unit(1, 1, "A", 1000.0), unit(2, 1, "B", 1000.0)];
        let bookings = vec![
            night(1, 1, day(2024, 3, 10), BookingStatus::Booked, 1000.0),
            night(2, 2, day(2024, 3, 10), BookingStatus::Booked, 1000.0),
            night(3, 1, day(2024, 3, 11), BookingStatus::Booked, 1000.0),
        ];

        let heatmap = occupancy_heatmap(&properties, &bookings, None, day(2024, 3, 1));

        assert_eq!(heatmap.len(), 31);
        assert!(heatmap
            .iter()
            .all(|d| (0.0..=100.0).contains(&d.occupancy_rate)));

        let tenth = &heatmap[9];
        assert_eq!(tenth.day, 10);
        assert_eq!(tenth.date, day(2024, 3, 10));
        assert_eq!(tenth.booked_properties, 2);
        assert_eq!(tenth.occupancy_rate, 100.0);

        let eleventh = &heatmap[10];
        assert_eq!(eleventh.booked_properties, 1);
        assert_eq!(eleventh.occupancy_rate, 50.0);

        let first = &heatmap[0];
        assert_eq!(first.booked_properties, 0);
        assert_eq!(first.occupancy_rate, 0.0);
    }

    #[test]
    fn test_property_performance_values() {
        let (_areas, properties, bookings) = goa_fixture();

        let rows = property_performance(&properties, &bookings, Some(1), day(2024, 3, 1));

        assert_eq!(rows.len(), 2);
        let villa_a = rows.iter().find(|r| r.name == "Villa A").unwrap();
        assert_eq!(villa_a.revenue, 15000.0);
        assert_eq!(villa_a.booked_nights, 5);
        assert!((villa_a.occupancy_rate - (5.0 / 31.0) * 100.0).abs() < 1e-9);
        assert_eq!(villa_a.average_rate, 3000.0);

        let villa_b = rows.iter().find(|r| r.name == "Villa B").unwrap();
        assert_eq!(villa_b.revenue, 0.0);
        assert_eq!(villa_b.booked_nights, 0);
        assert_eq!(villa_b.average_rate, 0.0);
    }

    #[test]
    fn test_sort_toggle_semantics() {
        let state = SortState::default();
        assert_eq!(state.key, SortKey::Revenue);
        assert_eq!(state.direction, SortDirection::Desc);

        // New column: switches at descending
        let state = state.toggle(SortKey::Occupancy);
        assert_eq!(state.key, SortKey::Occupancy);
        assert_eq!(state.direction, SortDirection::Desc);

        // Same column: flips
        let state = state.toggle(SortKey::Occupancy);
        assert_eq!(state.direction, SortDirection::Asc);
        let state = state.toggle(SortKey::Occupancy);
        assert_eq!(state.direction, SortDirection::Desc);
    }

    #[test]
    fn test_sort_flip_keeps_values() {
        let (_areas, properties, bookings) = goa_fixture();
        let mut rows = property_performance(&properties, &bookings, Some(1), day(2024, 3, 1));

        let mut state = SortState::default().toggle(SortKey::Occupancy).toggle(SortKey::Occupancy);
        assert_eq!(state.direction, SortDirection::Asc);
        sort_performance(&mut rows, state);
        assert_eq!(rows[0].name, "Villa B");
        assert_eq!(rows[1].name, "Villa A");
        let before: Vec<f64> = rows.iter().map(|r| r.occupancy_rate).collect();

        // Clicking the active header flips direction, values untouched
        state = state.toggle(SortKey::Occupancy);
        sort_performance(&mut rows, state);
        assert_eq!(rows[0].name, "Villa A");
        let mut after: Vec<f64> = rows.iter().map(|r| r.occupancy_rate).collect();
        after.reverse();
        assert_eq!(before, after);
    }

    #[test]
    fn test_sort_by_revenue_and_rate() {
        let mut rows = vec![
            PropertyPerformance {
                property_id: 1,
                name: "Low".to_string(),
                bedrooms: 1,
                property_type: PropertyType::Normal,
                airbnb_link: None,
                revenue: 100.0,
                booked_nights: 1,
                occupancy_rate: 10.0,
                average_rate: 100.0,
            },
            PropertyPerformance {
                property_id: 2,
                name: "High".to_string(),
                bedrooms: 1,
                property_type: PropertyType::Luxury,
                airbnb_link: None,
                revenue: 900.0,
                booked_nights: 3,
                occupancy_rate: 30.0,
                average_rate: 300.0,
            },
        ];

        sort_performance(&mut rows, SortState::default());
        assert_eq!(rows[0].name, "High");

        sort_performance(
            &mut rows,
            SortState {
                key: SortKey::Rate,
                direction: SortDirection::Asc,
            },
        );
        assert_eq!(rows[0].name, "Low");
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(day(2024, 2, 15)), 29);
        assert_eq!(days_in_month(day(2023, 2, 15)), 28);
        assert_eq!(days_in_month(day(2024, 12, 31)), 31);
        assert_eq!(days_in_month(day(2024, 6, 1)), 30);
    }
}
