//! Read-only aggregates behind the dashboards.
//!
//! Each query returns rows already shaped for charting: the presentation layer
//! only decides how to draw them.

use rusqlite::params;

use super::sample_queries::sample_from_row;
use crate::{
    error::Result,
    models::{HiveSummary, PendingSample, SpeciesCount},
};

/// Number of species shown in the species dashboard.
pub const TOP_SPECIES_LIMIT: usize = 10;

const HIVE_SUMMARY_SQL: &str = "
    SELECT
        a.id_apicultor,
        a.nombre || ' ' || a.apellido AS apicultor,
        COUNT(ap.id_apiario) AS total_apiarios,
        SUM(ap.cant_colmenas) AS total_colmenas
    FROM apicultor a
    LEFT JOIN apiarios ap ON a.id_apicultor = ap.id_apicultor
    GROUP BY a.id_apicultor, a.nombre, a.apellido
    ORDER BY total_colmenas DESC NULLS LAST, a.apellido, a.nombre";

const TOP_SPECIES_SQL: &str = "
    SELECT
        e.nombre_comun,
        SUM(ap.cantidad_granos) AS cantidad
    FROM analisis_palinologico ap
    JOIN especies e ON ap.id_especie = e.id_especie
    GROUP BY e.nombre_comun
    ORDER BY cantidad DESC, e.nombre_comun
    LIMIT ?1";

const PENDING_SAMPLES_SQL: &str = "
    SELECT
        m.id_muestra, m.id_analista, m.fecha_extraccion, m.fecha_analisis,
        m.num_registro, m.observaciones,
        an.nombres || ' ' || an.apellidos AS analista
    FROM muestra m
    JOIN analista an ON m.id_analista = an.id_analista
    WHERE m.fecha_analisis IS NULL
    ORDER BY m.fecha_extraccion, m.id_muestra";

impl super::Database {
    /// Apiary and hive totals per beekeeper, largest first.
    ///
    /// Beekeepers without apiaries are included with zero apiaries and no hive
    /// total, and sort after everyone else.
    pub fn hive_summary(&self) -> Result<Vec<HiveSummary>> {
        self.query_all(
            HIVE_SUMMARY_SQL,
            [],
            |row| {
                Ok(HiveSummary {
                    beekeeper_id: row.get("id_apicultor")?,
                    beekeeper: row.get("apicultor")?,
                    total_apiaries: row.get("total_apiarios")?,
                    total_hives: row.get("total_colmenas")?,
                })
            },
            "Failed to summarize hives",
        )
    }

    /// Species with the most pollen grains counted across all analyses.
    pub fn top_species(&self, limit: usize) -> Result<Vec<SpeciesCount>> {
        self.query_all(
            TOP_SPECIES_SQL,
            params![limit as i64],
            |row| {
                Ok(SpeciesCount {
                    common_name: row.get("nombre_comun")?,
                    grain_count: row.get("cantidad")?,
                })
            },
            "Failed to rank species",
        )
    }

    /// Samples not analyzed yet, oldest extraction first.
    pub fn pending_samples(&self) -> Result<Vec<PendingSample>> {
        self.query_all(
            PENDING_SAMPLES_SQL,
            [],
            |row| {
                Ok(PendingSample {
                    sample: sample_from_row(row)?,
                    analyst: row.get("analista")?,
                })
            },
            "Failed to list pending samples",
        )
    }
}
