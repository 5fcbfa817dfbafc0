//! Text rendering of lookup results and load failures.
//!
//! Messages shown to patients and staff are in French, as on the clinic's
//! lookup page. Logs stay in English.

use std::fmt::Write;

use anesth_ingest::ScheduleSource;
use anesth_model::{DoctolibLinks, LookupMiss, LookupOutcome};

/// Renders a lookup outcome as terminal text.
pub fn render_outcome(outcome: &LookupOutcome, links: &DoctolibLinks) -> String {
    let mut out = String::new();
    match outcome {
        LookupOutcome::Found(assignment) => {
            let name = &assignment.anesthesiologist;
            let _ = writeln!(out, "Anesthésiste : {name}");
            if let Some(url) = links.get(name) {
                let _ = writeln!(out, "Doctolib : {url}");
            }
            if assignment.is_random() {
                let _ = writeln!(
                    out,
                    "Info : Aucun planning trouvé, anesthésiste attribué aléatoirement : {name}."
                );
            } else {
                let _ = writeln!(
                    out,
                    "Important : Prenez rendez-vous sur Doctolib avec {name} pour votre \
                     consultation pré-opératoire. C'est cet anesthésiste qui vous endormira \
                     le jour de votre opération."
                );
            }
        }
        LookupOutcome::NotFound(miss) => {
            let _ = writeln!(out, "Erreur : Impossible de trouver un anesthésiste.");
            let _ = writeln!(out, "{}", describe_miss(miss));
        }
    }
    out
}

fn describe_miss(miss: &LookupMiss) -> String {
    match miss {
        LookupMiss::DateNotFound { date } => format!("Aucun planning pour le {date}."),
        LookupMiss::SurgeonNotFound { date, surgeon } => {
            format!("Aucune affectation pour {surgeon} le {date}.")
        }
    }
}

/// Diagnostic block for a schedule that could not be loaded.
///
/// `error` is printed with its whole cause chain.
pub fn render_load_failure(source: &ScheduleSource, client: &str, error: &anyhow::Error) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Erreur lors du chargement des données.");
    let _ = writeln!(out, "Veuillez réessayer ou contacter la clinique.");
    let _ = writeln!(out);
    let _ = writeln!(out, "Source: {source}");
    let _ = writeln!(out, "Client: {client}");
    let _ = writeln!(out, "Erreur: {error:#}");
    if source.is_remote() {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Astuce : si cela fonctionne en partage de connexion 4G mais pas sur le Wi-Fi \
             de la clinique, le réseau bloque probablement l'accès au tableur publié."
        );
    }
    out
}
