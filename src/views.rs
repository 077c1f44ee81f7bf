//! Server-rendered HTML for the three pages. The pages are small enough to
//! build as plain strings; every user-sourced value goes through [`escape`].

use crate::model::record::AttendanceRecord;

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"es\">\n<head><meta charset=\"utf-8\"><title>{title}</title></head>\n<body>\n<h1>{title}</h1>\n{body}\n</body>\n</html>\n"
    )
}

/// The record table. Each row carries the record together with its position
/// in the FULL sequence, so the edit/delete links stay valid when the table
/// is filtered.
pub fn index(records: &[(usize, &AttendanceRecord)], filtro: &str) -> String {
    let mut rows = String::new();
    for (indice, record) in records {
        rows.push_str(&format!(
            "<tr><td>{nombre}</td><td>{fecha}</td><td>{hora}</td><td>{asistio}</td>\
             <td><a href=\"/editar/{indice}\">Editar</a> <a href=\"/eliminar/{indice}\">Eliminar</a></td></tr>\n",
            nombre = escape(&record.nombre),
            fecha = record.fecha,
            hora = record.hora_registro.format("%H:%M:%S"),
            asistio = if record.asistio { "Sí" } else { "No" },
        ));
    }

    let body = format!(
        "<form method=\"get\" action=\"/\">\
         <input type=\"text\" name=\"nombre\" placeholder=\"Filtrar por nombre\" value=\"{filtro}\">\
         <button type=\"submit\">Buscar</button></form>\n\
         <p><a href=\"/registrar\">Registrar asistencia</a></p>\n\
         <table border=\"1\">\n\
         <tr><th>Nombre</th><th>Fecha</th><th>Hora de registro</th><th>Asistió</th><th>Acciones</th></tr>\n\
         {rows}</table>",
        filtro = escape(filtro),
    );
    page("Registros de asistencia", &body)
}

pub fn registrar() -> String {
    page(
        "Registrar asistencia",
        "<form method=\"post\" action=\"/registrar\">\
         <label>Nombre: <input type=\"text\" name=\"nombre\"></label> \
         <button type=\"submit\">Guardar</button></form>\n\
         <p><a href=\"/\">Volver</a></p>",
    )
}

pub fn editar(indice: usize, record: &AttendanceRecord) -> String {
    let body = format!(
        "<form method=\"post\" action=\"/editar/{indice}\">\
         <label>Nombre: <input type=\"text\" name=\"nombre\" value=\"{nombre}\"></label><br>\
         <label>Fecha: <input type=\"date\" name=\"fecha\" value=\"{fecha}\"></label><br>\
         <label>Asistió: <select name=\"asistio\">\
         <option value=\"True\"{sel_si}>Sí</option>\
         <option value=\"False\"{sel_no}>No</option>\
         </select></label><br>\
         <button type=\"submit\">Guardar cambios</button></form>\n\
         <p><a href=\"/\">Volver</a></p>",
        nombre = escape(&record.nombre),
        fecha = record.fecha,
        sel_si = if record.asistio { " selected" } else { "" },
        sel_no = if record.asistio { "" } else { " selected" },
    );
    page("Editar registro", &body)
}
