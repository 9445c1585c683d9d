//! Scrubs a toy animation group from a programmatic scroll source.
//!
//! Run with `RUST_LOG=debug cargo run --example scrub` to watch the
//! attach/detach bookkeeping alongside the frames.

use std::cell::RefCell;
use std::rc::Rc;

use scrollbound::{
    AnimationGroup, AnimationScene, NodeRef, Observable, ScrollAxis, ScrollBoundAnimator,
    ScrollState, SharedAnimationGroup,
};

const HERO: u32 = 1;

struct DemoGroup {
    from: f32,
    to: f32,
    targets: Vec<u32>,
    frame: f32,
}

impl AnimationGroup for DemoGroup {
    type Node = u32;

    fn from_frame(&self) -> f32 {
        self.from
    }

    fn to_frame(&self) -> f32 {
        self.to
    }

    fn play(&mut self) {}

    fn pause(&mut self) {}

    fn goto_frame(&mut self, frame: f32) {
        self.frame = frame;
    }

    fn animated_targets(&self) -> &[u32] {
        &self.targets
    }
}

struct DemoScene {
    groups: Vec<SharedAnimationGroup<DemoGroup>>,
    render_tick: Observable<()>,
}

impl AnimationScene for DemoScene {
    type Group = DemoGroup;

    fn animation_groups(&self) -> Vec<SharedAnimationGroup<DemoGroup>> {
        self.groups.clone()
    }

    fn before_render(&self) -> &Observable<()> {
        &self.render_tick
    }
}

fn main() {
    env_logger::init();

    let group = Rc::new(RefCell::new(DemoGroup {
        from: 0.0,
        to: 120.0,
        targets: vec![HERO],
        frame: 0.0,
    }));
    let scene = Rc::new(DemoScene {
        groups: vec![group.clone()],
        render_tick: Observable::new(),
    });

    // A page worth of content: 3000 units in a 900 unit viewport.
    let scroll = Rc::new(ScrollState::new());
    scroll.set_extents(ScrollAxis::Vertical, 3000.0, 900.0);

    let mut animator = ScrollBoundAnimator::new(scroll.clone());
    animator.attach(&NodeRef::new(&scene, HERO));

    // First paint picks up the initial position.
    scene.before_render().notify(&());
    println!("initial     frame = {:>6.1}", group.borrow().frame);

    for offset in [300.0, 900.0, 1500.0, 2100.0] {
        scroll.set_offset(ScrollAxis::Vertical, offset);
        println!("offset {offset:>5.0} frame = {:>6.1}", group.borrow().frame);
    }

    animator.detach();
    scroll.set_offset(ScrollAxis::Vertical, 0.0);
    println!("detached    frame = {:>6.1} (unchanged)", group.borrow().frame);
}
