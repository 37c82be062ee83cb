// crates/temperature/src/domain/replica/apply_outcome.rs

/// Résultat d'une application d'événement sur la réplique.
///
/// `Ignored` n'est PAS une erreur : c'est le no-op de l'idempotence, rendu
/// quand l'événement n'est pas strictement plus récent que le dernier
/// appliqué (doublon ou message périmé). Les deux verdicts valent un ack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// La réplique a été modifiée
    Applied,
    /// Doublon ou événement périmé : état inchangé
    Ignored,
}
