//! Air quality table for the locations picked in compare mode.

use crate::state::AppState;
use awt_data::comparison::ComparisonTable as Table;
use dioxus::prelude::*;

#[component]
pub fn ComparisonTable() -> Element {
    let state = use_context::<AppState>();
    let report = state.report.read();
    let Some(report) = report.as_ref() else {
        return rsx! {};
    };
    let comparison = Table::build(report, state.view.read().compare_locations());

    rsx! {
        div {
            style: "margin-top: 24px;",
            h3 { style: "margin: 0 0 8px 0;", "Location Comparison" }
            if comparison.is_empty() {
                p { style: "font-size: 13px; color: #888;", "Select locations to compare." }
            } else {
                table {
                    style: "border-collapse: collapse; width: 100%; font-size: 13px;",
                    thead {
                        tr {
                            for column in comparison.columns.iter() {
                                th {
                                    style: "text-align: left; padding: 4px 8px; border-bottom: 2px solid #109ea2; text-transform: capitalize;",
                                    "{column}"
                                }
                            }
                        }
                    }
                    tbody {
                        for row in comparison.rows.iter() {
                            tr {
                                key: "{row.location}",
                                for cell in row.cells.iter() {
                                    td { style: "padding: 4px 8px; border-bottom: 1px solid #eee;", "{cell}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
