use actix_web::http::header;
use actix_web::{HttpResponse, Responder, web};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::model::record::AttendanceRecord;
use crate::state::AppState;
use crate::views;

#[derive(Deserialize)]
pub struct ListQuery {
    nombre: Option<String>,
}

#[derive(Deserialize)]
pub struct RegistrarForm {
    nombre: Option<String>,
}

#[derive(Deserialize)]
pub struct EditarForm {
    #[serde(default)]
    nombre: String,
    #[serde(default)]
    fecha: String,
    asistio: Option<String>,
}

fn redirect_to_index() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, "/"))
        .finish()
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

fn persist(state: &AppState, records: &[AttendanceRecord]) -> actix_web::Result<()> {
    state.store.save(records).map_err(|e| {
        error!(error = %e, "Failed to persist attendance records");
        actix_web::error::ErrorInternalServerError("Internal Server Error")
    })
}

/// GET / — the record table, optionally narrowed to names containing the
/// `nombre` query parameter (case-insensitive). Filtering only changes what
/// is rendered, never the stored sequence.
pub async fn index(state: web::Data<AppState>, query: web::Query<ListQuery>) -> impl Responder {
    let filtro = query.nombre.as_deref().unwrap_or("").trim();
    let records = state.records.lock().expect("record list lock poisoned");

    // Positions must refer to the full sequence, so enumerate before filtering.
    let visible: Vec<(usize, &AttendanceRecord)> = if filtro.is_empty() {
        records.iter().enumerate().collect()
    } else {
        let needle = filtro.to_lowercase();
        records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.nombre.to_lowercase().contains(&needle))
            .collect()
    };

    html(views::index(&visible, filtro))
}

/// GET /registrar — the empty create form.
pub async fn registrar_form() -> impl Responder {
    html(views::registrar())
}

/// POST /registrar — append a record for the submitted name. A missing or
/// empty name re-renders the form without creating anything. Date and time
/// come from the time provider; a freshly registered record always counts
/// as attended.
pub async fn registrar(
    state: web::Data<AppState>,
    form: web::Form<RegistrarForm>,
) -> actix_web::Result<HttpResponse> {
    let nombre = match form.into_inner().nombre.filter(|n| !n.is_empty()) {
        Some(nombre) => nombre,
        None => return Ok(html(views::registrar())),
    };

    // Resolve the timestamp before taking the lock; the remote call can
    // stall for the full timeout.
    let resolved = state.time.now().await;
    info!(nombre = %nombre, source = ?resolved.source, "Registering attendance");

    let mut records = state.records.lock().expect("record list lock poisoned");
    records.push(AttendanceRecord {
        nombre,
        fecha: resolved.fecha,
        hora_registro: resolved.hora,
        asistio: true,
    });
    persist(&state, &records)?;

    Ok(redirect_to_index())
}

/// GET /editar/{indice} — the edit form, pre-filled. Out-of-range positions
/// redirect back to the list.
pub async fn editar_form(state: web::Data<AppState>, path: web::Path<usize>) -> impl Responder {
    let indice = path.into_inner();
    let records = state.records.lock().expect("record list lock poisoned");

    match records.get(indice) {
        Some(record) => html(views::editar(indice, record)),
        None => redirect_to_index(),
    }
}

/// POST /editar/{indice} — overwrite name, date, and attendance status as
/// submitted. Only the exact literal `"True"` marks the record as attended.
/// The registration time is never re-derived here.
pub async fn editar(
    state: web::Data<AppState>,
    path: web::Path<usize>,
    form: web::Form<EditarForm>,
) -> actix_web::Result<HttpResponse> {
    let indice = path.into_inner();
    let form = form.into_inner();

    let mut records = state.records.lock().expect("record list lock poisoned");
    let Some(record) = records.get_mut(indice) else {
        return Ok(redirect_to_index());
    };

    record.nombre = form.nombre;
    match NaiveDate::parse_from_str(&form.fecha, "%Y-%m-%d") {
        Ok(fecha) => record.fecha = fecha,
        Err(e) => {
            warn!(indice, fecha = %form.fecha, error = %e, "Ignoring unparsable date in edit")
        }
    }
    record.asistio = form.asistio.as_deref() == Some("True");

    persist(&state, &records)?;
    Ok(redirect_to_index())
}

/// GET /eliminar/{indice} — remove the record at that position. Out-of-range
/// positions are a no-op; either way the list is shown again.
pub async fn eliminar(
    state: web::Data<AppState>,
    path: web::Path<usize>,
) -> actix_web::Result<HttpResponse> {
    let indice = path.into_inner();

    let mut records = state.records.lock().expect("record list lock poisoned");
    if indice < records.len() {
        let removed = records.remove(indice);
        info!(indice, nombre = %removed.nombre, "Removed attendance record");
        persist(&state, &records)?;
    }

    Ok(redirect_to_index())
}
