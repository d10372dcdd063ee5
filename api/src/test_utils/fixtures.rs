//! Test fixtures
//!
//! Sample feed bodies and record factories.

use crate::domain::entities::{columns, NewsRecord};

/// A realistic export: four publishable stories, one broken row, one untitled row.
///
/// Display order is: Lima (Alta), Chile (12 mar), café (10 mar), minería (no date).
pub const SAMPLE_FEED_CSV: &str = "\
Título,Descripción,Contenido,Imagen,Categoría,País,Fecha,Prioridad,Fuente
Chile anuncia nuevo litio,Plan nacional,\"El gobierno, según fuentes, \"\"acelera\"\" el plan\",https://img.test/litio.jpg,Economía,Chile,12 de marzo de 2026,Media,El Mercurio
Alerta por lluvias en Lima,Intensas lluvias en la costa,Se esperan precipitaciones,,Clima,Perú,1 de febrero de 2026,Alta,RPP
Fila rota,sin campos

,Sin título,,,Economía,Chile,1 de enero de 2026,Media,
Exportaciones de café crecen,Cifras del trimestre,Crecimiento sostenido,,Economía,Colombia,10 de marzo de 2026,Baja,Portafolio
Minería en Perú se recupera,Producción estable,,,Economía,Perú,fecha por confirmar,Media,Gestión
";

/// Create a record with title, date and priority
pub fn news_record(title: &str, date: &str, priority: &str) -> NewsRecord {
    NewsRecord::new()
        .with(columns::TITLE, title)
        .with(columns::DATE, date)
        .with(columns::PRIORITY, priority)
}

/// Create a fully populated record
pub fn full_news_record(title: &str) -> NewsRecord {
    NewsRecord::new()
        .with(columns::TITLE, title)
        .with(columns::DESCRIPTION, "Resumen breve de la noticia")
        .with(columns::CONTENT, "Texto completo de la noticia.")
        .with(columns::IMAGE, "https://img.test/portada.jpg")
        .with(columns::CATEGORY, "Economía")
        .with(columns::COUNTRY, "Chile")
        .with(columns::DATE, "5 de enero de 2026")
        .with(columns::PRIORITY, "Alta")
        .with(columns::SOURCE, "La Tercera")
}
