//! Doctolib profile links for the clinic's anesthesiologists.
//!
//! Keys are matched exactly against the name returned by a lookup; no
//! honorific normalization is applied.

const DOCTOLIB_LINKS: &[(&str, &str)] = &[
    (
        "Dr. Aupetit",
        "https://www.doctolib.fr/anesthesiste/lyon/clemence-aupetit",
    ),
    (
        "Dr. Caillierez",
        "https://www.doctolib.fr/anesthesiste/lyon/romain-caillierez",
    ),
    (
        "Dr. Cuche",
        "https://www.doctolib.fr/anesthesiste/lyon/henri-cuche",
    ),
    (
        "Dr. Favre Felix",
        "https://www.doctolib.fr/anesthesiste/lyon/jeremy-favre-felix",
    ),
    (
        "Dr. Maatoug",
        "https://www.doctolib.fr/anesthesiste/lyon/adel-maatoug",
    ),
    (
        "Dr. Mariat",
        "https://www.doctolib.fr/anesthesiste/lyon/geraldine-mariat",
    ),
    (
        "Dr. Reymond",
        "https://www.doctolib.fr/anesthesiste/lyon/barnabe-reymond",
    ),
    (
        "Dr. Rousson",
        "https://www.doctolib.fr/anesthesiste/lyon/delphine-rousson",
    ),
    (
        "Dr. Vaudelin",
        "https://www.doctolib.fr/anesthesiste/lyon/guillemette-vaudelin",
    ),
];

/// Static name → profile URL table.
#[derive(Debug, Clone, Copy)]
pub struct DoctolibLinks {
    entries: &'static [(&'static str, &'static str)],
}

impl DoctolibLinks {
    /// The clinic's table.
    pub const fn clinic() -> Self {
        Self {
            entries: DOCTOLIB_LINKS,
        }
    }

    pub fn get(&self, anesthesiologist: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(name, _)| *name == anesthesiologist)
            .map(|(_, url)| *url)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for DoctolibLinks {
    fn default() -> Self {
        Self::clinic()
    }
}
