use crate::config::DELAY_ATTRIBUTE;
use crate::surface::Surface;

/// Where the members of a stagger group live on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// `children` inside the first element matching `container`.
    Within { container: &'static str, children: &'static str },
    /// Every element in the document matching `selector`.
    Each { selector: &'static str },
    /// `children` inside every element matching `containers`; each container
    /// counts from zero.
    PerContainer { containers: &'static str, children: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupSpec {
    pub name: &'static str,
    pub scope: Scope,
    pub base_ms: u32,
    pub step_ms: u32,
}

pub fn delay_at(base_ms: u32, step_ms: u32, index: usize) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    base_ms.saturating_add(index.saturating_mul(step_ms))
}

/// Writes `base + i * step` onto the i-th member. Returns how many members
/// were touched.
pub fn assign<S: Surface>(members: &[S], base_ms: u32, step_ms: u32) -> usize {
    for (index, member) in members.iter().enumerate() {
        write_delay(member, delay_at(base_ms, step_ms, index));
    }
    members.len()
}

/// Applies one group spec over the member lists the page resolved for it.
pub fn apply<S: Surface>(spec: &GroupSpec, groups: &[Vec<S>]) -> usize {
    groups
        .iter()
        .map(|members| assign(members, spec.base_ms, spec.step_ms))
        .sum()
}

pub fn write_delay<S: Surface>(surface: &S, millis: u32) {
    surface.set_data(DELAY_ATTRIBUTE, &millis.to_string());
}

pub fn read_delay<S: Surface>(surface: &S) -> u32 {
    surface.data(DELAY_ATTRIBUTE).map(|raw| parse_delay(&raw)).unwrap_or(0)
}

/// Leading decimal digits as milliseconds; anything unparseable or negative
/// is zero.
pub fn parse_delay(raw: &str) -> u32 {
    let digits = raw.trim_start();
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = &digits[..end];
    if digits.is_empty() {
        return 0;
    }
    digits.parse::<u32>().unwrap_or(u32::MAX)
}
