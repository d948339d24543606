use log::debug;

use crate::clock::Clock;
use crate::config::{
    MotionPreference, ACTIVE_CLASS, DESCRIPTION_SETTLE_MS, NAME_SETTLE_MS, SUBTITLE_SETTLE_MS,
    TYPING_SPEED_MS,
};
use crate::surface::Surface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroStage {
    Name,
    Subtitle,
    Description,
    Buttons,
}

/// Hero blocks as found on the page.
#[derive(Debug, Clone)]
pub struct HeroParts<S> {
    pub name: Option<S>,
    pub subtitle: Option<S>,
    pub description: Option<S>,
    pub buttons: Option<S>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Type { text: String, speed_ms: u32 },
    Activate,
}

/// A stage runs its action, waits `settle_ms`, then hands over to the next.
#[derive(Debug, Clone)]
pub struct Stage<S> {
    pub stage: HeroStage,
    pub target: Option<S>,
    pub action: Action,
    pub settle_ms: u32,
}

pub struct HeroSequence<S> {
    stages: Vec<Stage<S>>,
}

impl<S: Surface> HeroSequence<S> {
    /// The page's cascade: typed name, then subtitle, description and
    /// buttons. `None` without a name element.
    pub fn from_parts(parts: HeroParts<S>) -> Option<Self> {
        let name = parts.name?;
        let text = name.text();
        let stages = vec![
            Stage {
                stage: HeroStage::Name,
                target: Some(name),
                action: Action::Type { text, speed_ms: TYPING_SPEED_MS },
                settle_ms: NAME_SETTLE_MS,
            },
            Stage {
                stage: HeroStage::Subtitle,
                target: parts.subtitle,
                action: Action::Activate,
                settle_ms: SUBTITLE_SETTLE_MS,
            },
            Stage {
                stage: HeroStage::Description,
                target: parts.description,
                action: Action::Activate,
                settle_ms: DESCRIPTION_SETTLE_MS,
            },
            Stage {
                stage: HeroStage::Buttons,
                target: parts.buttons,
                action: Action::Activate,
                settle_ms: 0,
            },
        ];
        Some(Self::new(stages))
    }

    pub fn new(stages: Vec<Stage<S>>) -> Self {
        Self { stages }
    }

    pub fn stages(&self) -> &[Stage<S>] {
        &self.stages
    }

    pub fn run<C: Clock>(self, preference: MotionPreference, clock: C) {
        advance(self.stages.into_iter(), preference, clock);
    }
}

fn advance<S, C>(mut rest: std::vec::IntoIter<Stage<S>>, preference: MotionPreference, clock: C)
where
    S: Surface,
    C: Clock,
{
    let Some(Stage { stage, target, action, settle_ms }) = rest.next() else {
        return;
    };
    debug!("Hero stage {:?}", stage);

    let timer = clock.clone();
    let then = move || {
        if !rest.as_slice().is_empty() {
            let next = timer.clone();
            timer.after(settle_ms, move || advance(rest, preference, next));
        }
    };

    match (target, action) {
        (Some(target), Action::Type { text, speed_ms }) => {
            type_out(target, text, speed_ms, preference, clock, then)
        }
        (Some(target), Action::Activate) => {
            target.add_class(ACTIVE_CLASS);
            then();
        }
        (None, _) => {
            debug!("Hero stage {:?} has no element, skipping", stage);
            then();
        }
    }
}

/// Typewriter: marks `target` active and writes `text` one character per
/// `speed_ms`, then calls `done` one tick after the last character. Reduced
/// motion writes the whole text and calls `done` at once.
pub fn type_out<S, C, F>(
    target: S,
    text: String,
    speed_ms: u32,
    preference: MotionPreference,
    clock: C,
    done: F,
) where
    S: Surface,
    C: Clock,
    F: FnOnce() + 'static,
{
    target.add_class(ACTIVE_CLASS);
    if !preference.animates() {
        target.show_text(&text);
        done();
        return;
    }

    target.show_text("");
    let ends: Vec<usize> = text
        .char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .collect();
    type_step(target, text, ends, 0, speed_ms, clock, Box::new(done));
}

fn type_step<S: Surface, C: Clock>(
    target: S,
    text: String,
    ends: Vec<usize>,
    index: usize,
    speed_ms: u32,
    clock: C,
    done: Box<dyn FnOnce()>,
) {
    let Some(&end) = ends.get(index) else {
        done();
        return;
    };
    target.show_text(&text[..end]);
    let next = clock.clone();
    clock.after(speed_ms, move || {
        type_step(target, text, ends, index + 1, speed_ms, next, done)
    });
}
