use std::cell::Cell;
use std::rc::Rc;

use log::{debug, info};

use crate::clock::Clock;
use crate::config::{MotionPreference, STAGGER_GROUPS};
use crate::effects::hero::{HeroParts, HeroSequence};
use crate::effects::reveal::{RevealEngine, Start};
use crate::effects::stagger::{self, Scope};
use crate::effects::tilt::TiltCard;
use crate::error::MotionError;
use crate::surface::Surface;

/// Where the effects find their elements and how they get wired to page
/// events.
pub trait Page {
    type Node: Surface;

    /// Member lists for a stagger scope, in document order. Empty when the
    /// container is missing.
    fn members(&self, scope: &Scope) -> Vec<Vec<Self::Node>>;
    fn animatables(&self) -> Vec<Self::Node>;
    fn hero(&self) -> HeroParts<Self::Node>;
    fn cards(&self) -> Vec<Self::Node>;

    /// Feed intersection notices for the engine's elements into it.
    fn observe<C: Clock>(&self, engine: Rc<RevealEngine<Self::Node, C>>) -> Result<(), MotionError>;
    /// Route pointer move/leave events on the card to it.
    fn track_pointer<C: Clock>(&self, card: TiltCard<Self::Node, C>) -> Result<(), MotionError>;
}

thread_local! {
    static STARTED: Cell<bool> = Cell::new(false);
}

/// Runs the page's effects the first time it is called. Later calls return
/// `Ok(false)`.
pub fn start<P: Page, C: Clock>(page: &P, preference: MotionPreference, clock: C) -> Result<bool, MotionError> {
    if STARTED.with(|started| started.replace(true)) {
        debug!("Animations already started");
        return Ok(false);
    }
    run(page, preference, clock)?;
    Ok(true)
}

/// Stagger delays, then reveal, hero and tilt, in that order.
pub fn run<P: Page, C: Clock>(page: &P, preference: MotionPreference, clock: C) -> Result<(), MotionError> {
    info!("Motion preference: {:?}", preference);

    for spec in STAGGER_GROUPS.iter() {
        let groups = page.members(&spec.scope);
        let touched = stagger::apply(spec, &groups);
        debug!("Staggered {} {} across {} group(s)", touched, spec.name, groups.len());
    }

    let engine = Rc::new(RevealEngine::new(page.animatables(), clock.clone()));
    match engine.start(preference) {
        Start::Instant(count) => info!("Revealed {} elements immediately", count),
        Start::Watching(count) => {
            info!("Watching {} elements for reveal", count);
            page.observe(engine.clone())?;
        }
    }

    match HeroSequence::from_parts(page.hero()) {
        Some(sequence) => {
            debug!("Hero sequence with {} stages", sequence.stages().len());
            sequence.run(preference, clock.clone());
        }
        None => debug!("No hero name element, skipping hero sequence"),
    }

    let mut tilted = 0;
    for card in page.cards() {
        if let Some(card) = TiltCard::attach(card, preference, clock.clone()) {
            page.track_pointer(card)?;
            tilted += 1;
        }
    }
    info!("Tilt attached to {} cards", tilted);

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::clock::VirtualClock;
    use crate::config::{ACTIVE_CLASS, DELAY_ATTRIBUTE, REVEALED_CLASS, TILT_CLASS};
    use crate::effects::reveal::Notice;
    use crate::effects::stagger::read_delay;
    use crate::testing::FakeElement;

    /// A portfolio page with two interests, three cards, two skill
    /// categories and two contact links. Cards double as animatables.
    struct FakePage {
        interests: Vec<FakeElement>,
        cards: Vec<FakeElement>,
        categories: Vec<Vec<FakeElement>>,
        links: Vec<FakeElement>,
        hero: HeroParts<FakeElement>,
        watched: RefCell<Vec<(Vec<u32>, Rc<RevealEngine<FakeElement, VirtualClock>>)>>,
        tracked: RefCell<Vec<TiltCard<FakeElement, VirtualClock>>>,
    }

    fn many(n: usize) -> Vec<FakeElement> {
        (0..n).map(|_| FakeElement::new()).collect()
    }

    impl FakePage {
        fn new() -> Self {
            FakePage {
                interests: many(2),
                cards: many(3),
                categories: vec![many(3), many(1)],
                links: many(2),
                hero: HeroParts {
                    name: Some(FakeElement::with_text("Jo")),
                    subtitle: Some(FakeElement::new()),
                    description: Some(FakeElement::new()),
                    buttons: Some(FakeElement::new()),
                },
                watched: RefCell::new(Vec::new()),
                tracked: RefCell::new(Vec::new()),
            }
        }

        fn engine(&self) -> Rc<RevealEngine<FakeElement, VirtualClock>> {
            self.watched.borrow()[0].1.clone()
        }
    }

    // The fake only knows the VirtualClock-driven engine, so the generic
    // hooks downcast through `Any`.
    impl Page for FakePage {
        type Node = FakeElement;

        fn members(&self, scope: &Scope) -> Vec<Vec<FakeElement>> {
            match scope {
                Scope::Within { container: ".bg-slate-700", .. } => vec![self.interests.clone()],
                Scope::Within { container: "#contact", .. } => vec![self.links.clone()],
                Scope::Each { .. } => vec![self.cards.clone()],
                Scope::PerContainer { .. } => self.categories.clone(),
                Scope::Within { .. } => Vec::new(),
            }
        }

        fn animatables(&self) -> Vec<FakeElement> {
            self.cards.clone()
        }

        fn hero(&self) -> HeroParts<FakeElement> {
            self.hero.clone()
        }

        fn cards(&self) -> Vec<FakeElement> {
            self.cards.clone()
        }

        fn observe<C: Clock>(&self, engine: Rc<RevealEngine<FakeElement, C>>) -> Result<(), MotionError> {
            let delays = engine.surfaces().iter().map(read_delay).collect();
            let any: Rc<dyn std::any::Any> = engine;
            let engine = any
                .downcast::<RevealEngine<FakeElement, VirtualClock>>()
                .expect("tests drive a virtual clock");
            self.watched.borrow_mut().push((delays, engine));
            Ok(())
        }

        fn track_pointer<C: Clock>(&self, card: TiltCard<FakeElement, C>) -> Result<(), MotionError> {
            let any: Box<dyn std::any::Any> = Box::new(card);
            let card = any
                .downcast::<TiltCard<FakeElement, VirtualClock>>()
                .expect("tests drive a virtual clock");
            self.tracked.borrow_mut().push(*card);
            Ok(())
        }
    }

    #[test]
    fn delays_are_in_place_before_observation_starts() {
        let page = FakePage::new();
        run(&page, MotionPreference::Full, VirtualClock::new()).expect("boot");

        let watched = page.watched.borrow();
        assert_eq!(watched.len(), 1);
        assert_eq!(watched[0].0, vec![0, 200, 400]);
    }

    #[test]
    fn every_group_gets_its_stagger() {
        let page = FakePage::new();
        run(&page, MotionPreference::Full, VirtualClock::new()).expect("boot");

        fn delays(els: &[FakeElement]) -> Vec<u32> {
            els.iter().map(read_delay).collect()
        }
        assert_eq!(delays(&page.interests), vec![0, 100]);
        assert_eq!(delays(&page.cards), vec![0, 200, 400]);
        assert_eq!(delays(&page.categories[0]), vec![0, 50, 100]);
        assert_eq!(delays(&page.categories[1]), vec![0]);
        assert_eq!(delays(&page.links), vec![0, 150]);
        assert!(page.links[1].data(DELAY_ATTRIBUTE).is_some());
    }

    #[test]
    fn full_motion_wires_reveal_hero_and_tilt() {
        let page = FakePage::new();
        let clock = VirtualClock::new();
        run(&page, MotionPreference::Full, clock.clone()).expect("boot");

        assert_eq!(page.tracked.borrow().len(), 3);
        assert!(page.cards.iter().all(|c| c.has_class(TILT_CLASS)));

        let name = page.hero.name.clone().expect("name");
        assert_eq!(name.text(), "J");

        let engine = page.engine();
        engine.notify([Notice { index: 2, is_intersecting: true }]);
        clock.advance(400);
        assert!(page.cards[2].has_class(REVEALED_CLASS));
        assert!(!page.cards[0].has_class(REVEALED_CLASS));
        assert_eq!(name.text(), "Jo");
    }

    #[test]
    fn reduced_motion_reveals_up_front_and_skips_tilt() {
        let page = FakePage::new();
        let clock = VirtualClock::new();
        run(&page, MotionPreference::Reduced, clock.clone()).expect("boot");

        assert!(page.watched.borrow().is_empty());
        assert!(page.tracked.borrow().is_empty());
        assert!(page.cards.iter().all(|c| c.has_class(REVEALED_CLASS)));
        assert!(page.cards.iter().all(|c| !c.has_class(TILT_CLASS)));

        let hero = &page.hero;
        assert_eq!(hero.name.as_ref().expect("name").texts(), vec!["Jo"]);
        clock.run_until_idle();
        assert!(hero.buttons.as_ref().expect("buttons").has_class(ACTIVE_CLASS));
    }

    #[test]
    fn starts_only_once() {
        let page = FakePage::new();
        assert!(start(&page, MotionPreference::Full, VirtualClock::new()).expect("first start"));
        assert!(!start(&page, MotionPreference::Full, VirtualClock::new()).expect("second start"));
        assert_eq!(page.watched.borrow().len(), 1);
        assert_eq!(page.tracked.borrow().len(), 3);
    }
}
