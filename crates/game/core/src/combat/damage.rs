//! Damage calculation and application.

use crate::state::Combatant;

// ============================================================================
// Damage Calculation
// ============================================================================

/// Calculate the damage `actor` would deal to `target` with a basic attack.
///
/// # Formula
///
/// ```text
/// clean_damage = max(actor.power - target.mitigation, 0)
/// final_damage = clean_damage * (1 - target.resistance)
/// ```
///
/// Resistance is not clamped: at or above 1.0 the result is zero or negative.
pub fn calculate_damage(actor: &Combatant, target: &Combatant) -> f64 {
    let clean_damage = (actor.power() - target.mitigation()).max(0.0);
    clean_damage * (1.0 - target.resistance())
}

/// Resolve a basic attack and apply it to the target.
///
/// Mutates `target.vitality` only. Returns the damage dealt.
///
/// This is the single place where formula damage reaches a combatant;
/// anything else that deals formula damage goes through here.
pub fn basic_attack(actor: &Combatant, target: &mut Combatant) -> f64 {
    let damage = calculate_damage(actor, target);
    target.take_damage(damage);
    damage
}
