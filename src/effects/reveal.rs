use std::cell::RefCell;
use std::rc::Rc;

use log::debug;

use crate::clock::Clock;
use crate::config::{MotionPreference, REVEALED_CLASS};
use crate::effects::stagger::read_delay;
use crate::surface::Surface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Watching,
    Scheduled,
    Revealed,
}

struct Slot<S> {
    surface: S,
    phase: Phase,
}

/// One intersection notification, by index into the engine's elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub index: usize,
    pub is_intersecting: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Start {
    /// Everything was revealed on the spot.
    Instant(usize),
    /// Elements are waiting for intersection notices.
    Watching(usize),
}

/// Scroll reveal: an element that enters the viewport gets `animate-in`
/// after its own `data-delay`, exactly once.
pub struct RevealEngine<S: Surface, C: Clock> {
    slots: Rc<RefCell<Vec<Slot<S>>>>,
    clock: C,
}

impl<S: Surface, C: Clock> RevealEngine<S, C> {
    pub fn new(elements: Vec<S>, clock: C) -> Self {
        let slots = elements
            .into_iter()
            .map(|surface| Slot { surface, phase: Phase::Idle })
            .collect();
        Self { slots: Rc::new(RefCell::new(slots)), clock }
    }

    pub fn start(&self, preference: MotionPreference) -> Start {
        let mut slots = self.slots.borrow_mut();
        if !preference.animates() {
            for slot in slots.iter_mut() {
                mark_revealed(slot);
            }
            return Start::Instant(slots.len());
        }
        for slot in slots.iter_mut().filter(|s| s.phase == Phase::Idle) {
            slot.phase = Phase::Watching;
        }
        Start::Watching(slots.len())
    }

    /// Handles a batch of notices. Returns the indices the caller must stop
    /// observing.
    pub fn notify<I>(&self, notices: I) -> Vec<usize>
    where
        I: IntoIterator<Item = Notice>,
    {
        let mut unobserve = Vec::new();
        for notice in notices {
            if !notice.is_intersecting {
                continue;
            }
            let delay = {
                let mut slots = self.slots.borrow_mut();
                let Some(slot) = slots.get_mut(notice.index) else {
                    continue;
                };
                if slot.phase != Phase::Watching {
                    continue;
                }
                slot.phase = Phase::Scheduled;
                read_delay(&slot.surface)
            };
            debug!("Element {} entered view, revealing in {}ms", notice.index, delay);

            let slots = self.slots.clone();
            let index = notice.index;
            self.clock.after(delay, move || {
                if let Some(slot) = slots.borrow_mut().get_mut(index) {
                    mark_revealed(slot);
                }
            });
            unobserve.push(index);
        }
        unobserve
    }

    pub fn surfaces(&self) -> Vec<S> {
        self.slots.borrow().iter().map(|s| s.surface.clone()).collect()
    }

    pub fn revealed_count(&self) -> usize {
        self.slots.borrow().iter().filter(|s| s.phase == Phase::Revealed).count()
    }
}

fn mark_revealed<S: Surface>(slot: &mut Slot<S>) {
    if slot.phase == Phase::Revealed {
        return;
    }
    slot.phase = Phase::Revealed;
    slot.surface.add_class(REVEALED_CLASS);
}
