//! `Accept-Language` negotiation

use super::Locale;

/// Pick the supported locale the client prefers most.
///
/// Entries are compared on their primary subtag (`fr-CA` matches `fr`).
/// Entries with `q=0` or an unparsable weight are ignored; ties keep header
/// order. Returns `None` when nothing supported is acceptable.
pub fn negotiate_accept_language(header: &str) -> Option<Locale> {
    let mut best: Option<(Locale, f32)> = None;

    for entry in header.split(',') {
        let mut parts = entry.trim().split(';');
        let tag = parts.next().unwrap_or("").trim();
        let primary = tag.split('-').next().unwrap_or("");

        let quality = match parts.find_map(|p| p.trim().strip_prefix("q=")) {
            Some(q) => match q.trim().parse::<f32>() {
                Ok(q) => q,
                Err(_) => continue,
            },
            None => 1.0,
        };
        if quality <= 0.0 {
            continue;
        }

        let Ok(locale) = primary.parse::<Locale>() else {
            continue;
        };

        if best.map_or(true, |(_, q)| quality > q) {
            best = Some((locale, quality));
        }
    }

    best.map(|(locale, _)| locale)
}
