//! R source assembly for bridge evaluations.
//!
//! Scripts are built from three parts: a prelude (package loading and
//! session options), the caller's fragment, and an emitter that
//! serializes the resulting data.frame to the JSON wire format. The
//! emitter classifies every cell with R's own predicates (`is.na`,
//! `is.factor`, `inherits(.., "Date")`), so missingness decisions are
//! made inside the foreign runtime, never by string inspection on the
//! host side.

/// R function serializing a data.frame to the wire format on stdout.
///
/// Integer and logical NA go out as R's INT_MIN sentinel; double and
/// character NA go out as JSON null (JSON has no NaN); factor cells go
/// out as 1-based codes next to the level labels. The bare-vector
/// branches require `!is.object(v)`: a classed vector whose storage
/// type happens to be double or integer (POSIXct, difftime) carries
/// semantics the wire format cannot represent, so it degrades to opaque
/// cells carrying the class name, which the marshaler rejects with
/// position information.
pub(crate) const EMITTER: &str = r#"
harvest_emit <- function(df) {
  df <- as.data.frame(df, stringsAsFactors = FALSE)
  na_int <- -2147483648L
  encode <- function(v) {
    if (is.factor(v)) {
      cells <- lapply(as.integer(v), function(x) {
        if (is.na(x)) list(t = "factor", v = na_int) else list(t = "factor", v = x)
      })
      list(type = "factor", levels = as.list(levels(v)), cells = cells)
    } else if (inherits(v, "Date")) {
      cells <- lapply(as.numeric(v), function(x) {
        if (is.na(x)) list(t = "date", v = NULL) else list(t = "date", v = x)
      })
      list(type = "date", cells = cells)
    } else if (is.logical(v) && !is.object(v)) {
      cells <- lapply(v, function(x) {
        if (is.na(x)) list(t = "logical", v = na_int) else list(t = "logical", v = as.integer(x))
      })
      list(type = "logical", cells = cells)
    } else if (is.integer(v) && !is.object(v)) {
      cells <- lapply(v, function(x) {
        if (is.na(x)) list(t = "integer", v = na_int) else list(t = "integer", v = x)
      })
      list(type = "integer", cells = cells)
    } else if (is.double(v) && !is.object(v)) {
      cells <- lapply(v, function(x) {
        if (is.na(x)) list(t = "real", v = NULL) else list(t = "real", v = x)
      })
      list(type = "real", cells = cells)
    } else if (is.character(v) && !is.object(v)) {
      cells <- lapply(v, function(x) {
        if (is.na(x)) list(t = "character", v = NULL) else list(t = "character", v = x)
      })
      list(type = "character", cells = cells)
    } else {
      cells <- rep(list(list(t = "opaque", v = class(v)[1])), length(v))
      list(type = "character", cells = cells)
    }
  }
  columns <- lapply(names(df), function(nm) {
    c(list(name = nm), encode(df[[nm]]))
  })
  payload <- list(nrow = nrow(df), columns = columns)
  cat(jsonlite::toJSON(payload, auto_unbox = TRUE, null = "null", digits = NA))
}
"#;

/// Escape a string for interpolation into double-quoted R source.
pub(crate) fn escape_r_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out
}

/// Session prelude: load (installing if absent) the required packages
/// and set the SurveyMonkey OAuth token when configured.
pub(crate) fn prelude(packages: &[String], oauth_token: Option<&str>) -> String {
    let mut out = String::new();

    for pkg in packages {
        let pkg = escape_r_string(pkg);
        out.push_str(&format!(
            "if (!requireNamespace(\"{pkg}\", quietly = TRUE)) \
             install.packages(\"{pkg}\", repos = \"https://cloud.r-project.org\")\n",
        ));
        out.push_str(&format!(
            "suppressPackageStartupMessages(library(\"{pkg}\", character.only = TRUE))\n",
        ));
    }

    if let Some(token) = oauth_token {
        out.push_str(&format!(
            "options(sm_oauth_token = \"{}\")\n",
            escape_r_string(token)
        ));
    }

    out
}

/// Fragment listing available surveys.
pub(crate) fn browse_surveys(limit: usize) -> String {
    format!("browse_surveys({limit})")
}

/// Fragment downloading and parsing one survey.
///
/// Survey ids are interpolated as numerics, never as raw strings, so
/// there is nothing to escape.
pub(crate) fn fetch_survey(survey_id: u64, completed_only: bool) -> String {
    let mut out = format!(
        "df <- parse_survey(fetch_survey_obj({survey_id}), fix_duplicates = \"none\")\n"
    );
    if completed_only {
        out.push_str("df <- df[df$response_status == \"completed\", ]\n");
    }
    out.push_str("df");
    out
}

/// Full script: prelude, emitter, then the fragment evaluated in a local
/// scope and handed to the emitter.
pub(crate) fn assemble(prelude: &str, fragment: &str) -> String {
    format!("{prelude}\n{EMITTER}\nharvest_emit(local({{\n{fragment}\n}}))\n")
}
