use leptos::prelude::*;

/// Stroke paths (24x24 viewBox) of the icons used by the app.
fn icon_paths(name: &str) -> &'static [&'static str] {
    match name {
        "suppliers" => &["M3 22h18", "M6 22V8l6-5 6 5v14", "M9 22v-9h6v9"],
        "globe" => &[
            "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20z",
            "M2 12h20",
            "M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z",
        ],
        "bank" => &["M3 21h18", "M3 10h18", "M12 3l9 5H3z", "M5 10v11", "M19 10v11", "M9 10v11", "M15 10v11"],
        "coins" => &[
            "M8 14a6 6 0 1 0 0-12a6 6 0 1 0 0 12z",
            "M18.09 10.37A6 6 0 1 1 10.34 18",
            "M7 6h1v4",
        ],
        "file-text" => &["M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z", "M14 2v6h6", "M16 13H8", "M16 17H8"],
        "layers" => &["M12 2 2 7l10 5 10-5-10-5z", "M2 17l10 5 10-5", "M2 12l10 5 10-5"],
        "tag" => &["M20.59 13.41l-7.17 7.17a2 2 0 0 1-2.83 0L2 12V2h10l8.59 8.59a2 2 0 0 1 0 2.82z", "M7 7h.01"],
        "building" => &["M4 22V4a2 2 0 0 1 2-2h8a2 2 0 0 1 2 2v18", "M16 10h2a2 2 0 0 1 2 2v10", "M2 22h20", "M8 6h4", "M8 10h4", "M8 14h4"],
        "shipments" => &["M3 7h13v10H3z", "M16 7h3l2 3v7h-5z", "M7.5 19.5a1.5 1.5 0 1 0 0-3a1.5 1.5 0 1 0 0 3z", "M18.5 19.5a1.5 1.5 0 1 0 0-3a1.5 1.5 0 1 0 0 3z"],
        "calendar" => &["M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z", "M16 2v4", "M8 2v4", "M3 10h18"],
        "database" => &["M12 8c4.97 0 9-1.34 9-3s-4.03-3-9-3-9 1.34-9 3 4.03 3 9 3z", "M21 12c0 1.66-4 3-9 3s-9-1.34-9-3", "M3 5v14c0 1.66 4 3 9 3s9-1.34 9-3V5"],
        "anchor" => &["M12 8a3 3 0 1 0 0-6a3 3 0 1 0 0 6z", "M12 22V8", "M5 12H2a10 10 0 0 0 20 0h-3"],
        "plus" => &["M12 5v14", "M5 12h14"],
        "edit" => &["M11 4H4a2 2 0 0 0-2 2v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2v-7", "M18.5 2.5a2.121 2.121 0 0 1 3 3L12 15l-4 1 1-4 9.5-9.5z"],
        "delete" => &["M3 6h18", "M19 6l-1 14a2 2 0 0 1-2 2H8a2 2 0 0 1-2-2L5 6", "M10 11v6", "M14 11v6", "M9 6V4a1 1 0 0 1 1-1h4a1 1 0 0 1 1 1v2"],
        "refresh" => &["M23 4v6h-6", "M1 20v-6h6", "M3.51 9a9 9 0 0 1 14.85-3.36L23 10", "M1 14l4.64 4.36A9 9 0 0 0 20.49 15"],
        "x" => &["M18 6 6 18", "M6 6l12 12"],
        "menu" => &["M3 12h18", "M3 6h18", "M3 18h18"],
        "chevron-left" => &["M15 18l-6-6 6-6"],
        "chevron-right" => &["M9 18l6-6-6-6"],
        "chevron-down" => &["M6 9l6 6 6-6"],
        "chevrons-left" => &["M11 17l-5-5 5-5", "M18 17l-5-5 5-5"],
        "chevrons-right" => &["M13 17l5-5-5-5", "M6 17l5-5-5-5"],
        _ => &["M12 22a10 10 0 1 0 0-20a10 10 0 1 0 0 20z", "M12 8v4l3 3"],
    }
}

pub fn icon(name: &str) -> AnyView {
    let paths = icon_paths(name);
    view! {
        <svg width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            {paths.iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
    .into_any()
}
