use crate::types::{Granularity, PlottedPoint, Variation};
use crate::utils::{format_date, format_percentage};

/// One line of the hover tooltip.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipRow {
    pub id: String,
    pub name: String,
    pub value: f64,
    pub label: String,
    /// Position in the selection, used to pick the series color
    pub color_index: usize,
    pub is_winner: bool,
}

/// Tooltip contents for one plotted point.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub header: String,
    pub rows: Vec<TooltipRow>,
}

impl Tooltip {
    /// Rows are sorted best first. Every variation tied for the best rate is
    /// marked as a winner. Returns `None` when the point carries no values.
    pub fn for_point(
        point: &PlottedPoint,
        selected: &[String],
        variations: &[Variation],
        granularity: Granularity,
    ) -> Option<Self> {
        let mut rows: Vec<TooltipRow> = selected
            .iter()
            .enumerate()
            .filter_map(|(color_index, id)| {
                let value = point.value(id)?;
                let name = variations
                    .iter()
                    .find(|v| &v.id == id)
                    .map(|v| v.name.clone())
                    .unwrap_or_else(|| id.clone());
                Some(TooltipRow {
                    id: id.clone(),
                    name,
                    value,
                    label: format_percentage(value),
                    color_index,
                    is_winner: false,
                })
            })
            .collect();

        if rows.is_empty() {
            return None;
        }

        rows.sort_by(|a, b| b.value.total_cmp(&a.value));
        let best = rows[0].value;
        for row in &mut rows {
            row.is_winner = row.value == best;
        }

        Some(Self {
            header: format_date(point.date, granularity),
            rows,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn variations() -> Vec<Variation> {
        vec![
            Variation {
                id: "0".to_string(),
                name: "Original".to_string(),
            },
            Variation {
                id: "1".to_string(),
                name: "Variation A".to_string(),
            },
        ]
    }

    fn point(values: &[(&str, f64)]) -> PlottedPoint {
        PlottedPoint {
            date: NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
            values: values.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
        }
    }

    #[test]
    fn test_rows_sorted_with_winner() {
        let selected = vec!["0".to_string(), "1".to_string()];
        let tooltip = Tooltip::for_point(
            &point(&[("0", 10.0), ("1", 12.5)]),
            &selected,
            &variations(),
            Granularity::Daily,
        )
        .unwrap();

        assert_eq!(tooltip.header, "06/01/2025");
        assert_eq!(tooltip.rows[0].name, "Variation A");
        assert_eq!(tooltip.rows[0].label, "12.50%");
        assert_eq!(tooltip.rows[0].color_index, 1);
        assert!(tooltip.rows[0].is_winner);
        assert!(!tooltip.rows[1].is_winner);
    }

    #[test]
    fn test_ties_are_all_winners() {
        let selected = vec!["0".to_string(), "1".to_string()];
        let tooltip = Tooltip::for_point(
            &point(&[("0", 7.0), ("1", 7.0)]),
            &selected,
            &variations(),
            Granularity::Weekly,
        )
        .unwrap();

        assert_eq!(tooltip.header, "Jan 6 - Jan 12");
        assert!(tooltip.rows.iter().all(|r| r.is_winner));
    }

    #[test]
    fn test_unknown_variation_falls_back_to_id() {
        let selected = vec!["42".to_string()];
        let tooltip = Tooltip::for_point(
            &point(&[("42", 1.0)]),
            &selected,
            &variations(),
            Granularity::Daily,
        )
        .unwrap();
        assert_eq!(tooltip.rows[0].name, "42");
    }

    #[test]
    fn test_empty_point_has_no_tooltip() {
        assert!(Tooltip::for_point(&point(&[]), &[], &variations(), Granularity::Daily).is_none());
    }
}
