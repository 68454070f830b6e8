use crate::constants::COLUMN_WIDTHS;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Text and pagination settings for a usage report.
///
/// Geometry and page capacity are fixed (see [`crate::constants`]); these
/// options only carry the labels printed on the report.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReportOptions {
    pub title: String,
    pub column_headers: Vec<String>,

    // Period label, January first
    pub month_names: Vec<String>,

    // Header line prefixes
    pub generated_at_label: String,
    pub running_total_label: String,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            title: "Resumen de uso mensual".to_string(),
            column_headers: [
                "#",
                "Nombre de la API",
                "Versión",
                "Nombre de la Aplicación",
                "Usuario",
                "Cantidad de peticiones",
            ]
            .iter()
            .map(|h| h.to_string())
            .collect(),
            month_names: [
                "Enero",
                "Febrero",
                "Marzo",
                "Abril",
                "Mayo",
                "Junio",
                "Julio",
                "Agosto",
                "Septiembre",
                "Octubre",
                "Noviembre",
                "Diciembre",
            ]
            .iter()
            .map(|m| m.to_string())
            .collect(),
            generated_at_label: "Reporte generado el : ".to_string(),
            running_total_label: "Total de peticiones realizadas : ".to_string(),
        }
    }
}

impl ReportOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| ReportError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ReportError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.column_headers.len() != COLUMN_WIDTHS.len() {
            return Err(ReportError::ColumnMismatch {
                headers: self.column_headers.len(),
                widths: COLUMN_WIDTHS.len(),
            });
        }

        if self.month_names.len() != 12 {
            return Err(ReportError::Config(format!(
                "Expected 12 month names, got {}",
                self.month_names.len()
            )));
        }

        Ok(())
    }

    /// Running total line stamped on page 1
    pub fn running_total_line(&self, total: u64) -> String {
        format!("{}{}", self.running_total_label, total)
    }
}
