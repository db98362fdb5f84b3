//! Printable store reports
//!
//! Renders the per-store stock report in the two formats the front office
//! uses: a printable HTML page and a CSV download.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use shared::models::{MovementType, StockMovement};

use crate::error::{AppError, AppResult};
use crate::repository::Repository;

/// Which part of the store report to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportSection {
    /// Net stock position per product, from the store's movement journal
    Current,
    Entries,
    Exits,
}

impl ReportSection {
    fn title_fr(&self) -> &'static str {
        match self {
            ReportSection::Current => "Stock actuel",
            ReportSection::Entries => "Entrées de stock",
            ReportSection::Exits => "Sorties de stock",
        }
    }
}

/// Output format of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    #[default]
    Html,
    Csv,
}

/// A rendered report, ready to ship as an HTTP response body
#[derive(Debug)]
pub struct RenderedReport {
    pub content_type: &'static str,
    pub body: String,
}

/// One movement line in the entries/exits sections
#[derive(Debug, Serialize)]
struct MovementRow {
    date: String,
    product: String,
    quantity: i32,
    user: String,
    reason: String,
    counterparty: String,
    unit_price: String,
}

impl From<&StockMovement> for MovementRow {
    fn from(m: &StockMovement) -> Self {
        Self {
            date: m.date.format("%d/%m/%Y").to_string(),
            product: m.product.clone(),
            quantity: m.quantity,
            user: m.user.clone(),
            reason: m.reason.clone(),
            counterparty: m.counterparty.clone().unwrap_or_default(),
            unit_price: m
                .unit_price
                .map(|p| p.to_string())
                .unwrap_or_default(),
        }
    }
}

/// One product line in the current stock section
#[derive(Debug, Serialize)]
struct PositionRow {
    product: String,
    entries: i64,
    exits: i64,
    net: i64,
}

/// Printable store report service
#[derive(Clone)]
pub struct ReportService {
    repo: Repository,
    company: String,
    currency: String,
}

impl ReportService {
    pub fn new(repo: Repository, company: String, currency: String) -> Self {
        Self {
            repo,
            company,
            currency,
        }
    }

    /// Render one section of a store's report
    pub async fn render(
        &self,
        store_id: i64,
        section: ReportSection,
        format: ReportFormat,
    ) -> AppResult<RenderedReport> {
        let catalog = self.repo.read().await;
        let store = catalog
            .stores
            .iter()
            .find(|s| s.id == store_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Store".to_string()))?;
        let movements: Vec<StockMovement> = catalog
            .movements
            .iter()
            .filter(|m| m.store == store.name)
            .cloned()
            .collect();
        drop(catalog);

        let body = match (section, format) {
            (ReportSection::Current, ReportFormat::Csv) => {
                to_csv(&positions(&movements)).map_err(AppError::Internal)?
            }
            (ReportSection::Current, ReportFormat::Html) => {
                self.position_html(&store.name, &positions(&movements))
            }
            (section, ReportFormat::Csv) => {
                let rows: Vec<MovementRow> = section_movements(&movements, section)
                    .map(MovementRow::from)
                    .collect();
                to_csv(&rows).map_err(AppError::Internal)?
            }
            (section, ReportFormat::Html) => {
                let rows: Vec<MovementRow> = section_movements(&movements, section)
                    .map(MovementRow::from)
                    .collect();
                self.movement_html(&store.name, section, &rows)
            }
        };
        Ok(RenderedReport {
            content_type: match format {
                ReportFormat::Html => "text/html; charset=utf-8",
                ReportFormat::Csv => "text/csv; charset=utf-8",
            },
            body,
        })
    }

    fn header_html(&self, store: &str, section_title: &str) -> String {
        format!(
            "<!DOCTYPE html>\n<html lang=\"fr\">\n<head>\n<meta charset=\"utf-8\">\n\
             <title>{title} — {store}</title>\n\
             <style>body{{font-family:sans-serif;margin:2rem}}table{{border-collapse:collapse;width:100%}}\
             th,td{{border:1px solid #ccc;padding:6px 10px;text-align:left}}th{{background:#f4f4f4}}</style>\n\
             </head>\n<body>\n<h1>{company}</h1>\n<h2>{title} — {store}</h2>\n\
             <p>Généré le {date} — montants en {currency}</p>\n",
            company = escape(&self.company),
            title = section_title,
            store = escape(store),
            date = Utc::now().format("%d/%m/%Y"),
            currency = escape(&self.currency),
        )
    }

    fn movement_html(&self, store: &str, section: ReportSection, rows: &[MovementRow]) -> String {
        let mut html = self.header_html(store, section.title_fr());
        html.push_str(
            "<table>\n<tr><th>Date</th><th>Produit</th><th>Quantité</th><th>Utilisateur</th>\
             <th>Motif</th><th>Tiers</th><th>Prix unitaire</th></tr>\n",
        );
        for row in rows {
            let _ = write!(
                html,
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                row.date,
                escape(&row.product),
                row.quantity,
                escape(&row.user),
                escape(&row.reason),
                escape(&row.counterparty),
                row.unit_price,
            );
        }
        html.push_str("</table>\n</body>\n</html>\n");
        html
    }

    fn position_html(&self, store: &str, rows: &[PositionRow]) -> String {
        let mut html = self.header_html(store, ReportSection::Current.title_fr());
        html.push_str(
            "<table>\n<tr><th>Produit</th><th>Entrées</th><th>Sorties</th><th>Solde</th></tr>\n",
        );
        for row in rows {
            let _ = write!(
                html,
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                escape(&row.product),
                row.entries,
                row.exits,
                row.net,
            );
        }
        html.push_str("</table>\n</body>\n</html>\n");
        html
    }
}

fn section_movements(
    movements: &[StockMovement],
    section: ReportSection,
) -> impl Iterator<Item = &StockMovement> {
    let wanted = match section {
        ReportSection::Entries => MovementType::Entry,
        ReportSection::Exits => MovementType::Exit,
        // callers route Current through positions() instead
        ReportSection::Current => MovementType::Entry,
    };
    movements.iter().filter(move |m| m.movement_type == wanted)
}

/// Net stock position per product for one store's journal
fn positions(movements: &[StockMovement]) -> Vec<PositionRow> {
    let mut by_product: BTreeMap<&str, (i64, i64)> = BTreeMap::new();
    for m in movements {
        let slot = by_product.entry(m.product.as_str()).or_default();
        match m.movement_type {
            MovementType::Entry => slot.0 += i64::from(m.quantity),
            MovementType::Exit => slot.1 += i64::from(m.quantity),
        }
    }
    by_product
        .into_iter()
        .map(|(product, (entries, exits))| PositionRow {
            product: product.to_string(),
            entries,
            exits,
            net: entries - exits,
        })
        .collect()
}

/// Serialize records to a CSV document with a header row
fn to_csv<T: Serialize>(records: &[T]) -> Result<String, String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for record in records {
        writer.serialize(record).map_err(|e| e.to_string())?;
    }
    let bytes = writer.into_inner().map_err(|e| e.to_string())?;
    String::from_utf8(bytes).map_err(|e| e.to_string())
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
