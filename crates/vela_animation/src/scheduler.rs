//! Animation scheduler
//!
//! Owns a set of animations and fans one clock tick out to all of them.
//! The clock itself stays external: the driver samples its time source once
//! per frame and passes the timestamp to [`AnimationScheduler::tick`], so
//! every animation in the set sees the same `now`.

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use tracing::debug;

use crate::animation::Animation;

new_key_type! {
    pub struct AnimationId;
}

/// Ticks all registered animations with a shared timestamp.
pub struct AnimationScheduler {
    animations: SlotMap<AnimationId, Animation>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            animations: SlotMap::with_key(),
        }
    }

    pub fn add(&mut self, animation: Animation) -> AnimationId {
        self.animations.insert(animation)
    }

    pub fn get(&self, id: AnimationId) -> Option<&Animation> {
        self.animations.get(id)
    }

    pub fn get_mut(&mut self, id: AnimationId) -> Option<&mut Animation> {
        self.animations.get_mut(id)
    }

    pub fn remove(&mut self, id: AnimationId) -> Option<Animation> {
        self.animations.remove(id)
    }

    /// Force-complete one animation. Returns false for unknown ids.
    pub fn cancel(&mut self, id: AnimationId) -> bool {
        match self.animations.get_mut(id) {
            Some(animation) => {
                animation.cancel();
                true
            }
            None => false,
        }
    }

    /// Step every animation to `now`. Returns how many actually advanced
    /// (finished animations no-op and do not count).
    pub fn tick(&mut self, now: f64) -> usize {
        let mut stepped = 0;
        for (_, animation) in self.animations.iter_mut() {
            if animation.step(now) {
                stepped += 1;
            }
        }
        stepped
    }

    /// True while any registered animation has not finished.
    pub fn has_active_animations(&self) -> bool {
        self.animations.iter().any(|(_, a)| !a.is_finished())
    }

    pub fn animation_count(&self) -> usize {
        self.animations.len()
    }

    /// Drop finished animations, returning how many were removed.
    pub fn prune_finished(&mut self) -> usize {
        let finished: SmallVec<[AnimationId; 8]> = self
            .animations
            .iter()
            .filter(|(_, a)| a.is_finished())
            .map(|(id, _)| id)
            .collect();
        for id in &finished {
            self.animations.remove(*id);
        }
        if !finished.is_empty() {
            debug!(removed = finished.len(), "pruned finished animations");
        }
        finished.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (AnimationId, &Animation)> {
        self.animations.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (AnimationId, &mut Animation)> {
        self.animations.iter_mut()
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animatable::Animatable;
    use crate::tween::Tween;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Slide {
        x: f32,
        tween: Option<Tween<f32>>,
    }

    impl Animatable for Slide {
        fn transform(&mut self, progress: f32) {
            if let Some(tween) = &self.tween {
                self.x = tween.value(progress);
            }
        }

        fn clear_transforms(&mut self) {
            self.tween = None;
        }
    }

    fn slide(to: f32) -> Rc<RefCell<Slide>> {
        Rc::new(RefCell::new(Slide {
            x: 0.0,
            tween: Some(Tween::new(0.0, to)),
        }))
    }

    #[test]
    fn test_tick_drives_all_animations() {
        let a = slide(10.0);
        let b = slide(100.0);
        let mut scheduler = AnimationScheduler::new();
        scheduler.add(Animation::new(a.clone(), 1.0));
        let b_id = scheduler.add(Animation::new(b.clone(), 2.0));

        assert_eq!(scheduler.tick(0.0), 2);
        assert_eq!(scheduler.tick(1.0), 2);
        assert_eq!(a.borrow().x, 10.0);
        assert_eq!(b.borrow().x, 50.0);

        // a is finished; only b still advances
        assert_eq!(scheduler.tick(2.0), 1);
        assert_eq!(b.borrow().x, 100.0);
        assert!(!scheduler.has_active_animations());
        assert!(scheduler.get(b_id).is_some());
    }

    #[test]
    fn test_prune_removes_only_finished() {
        let mut scheduler = AnimationScheduler::new();
        scheduler.add(Animation::new(slide(1.0), 1.0));
        scheduler.add(Animation::new(slide(1.0), 5.0));

        scheduler.tick(0.0);
        scheduler.tick(1.0);
        assert_eq!(scheduler.prune_finished(), 1);
        assert_eq!(scheduler.animation_count(), 1);
        assert!(scheduler.has_active_animations());
    }

    #[test]
    fn test_cancel_by_id() {
        let target = slide(10.0);
        let mut scheduler = AnimationScheduler::new();
        let id = scheduler.add(Animation::new(target.clone(), 2.0));

        scheduler.tick(0.0);
        assert!(scheduler.cancel(id));
        assert_eq!(target.borrow().x, 10.0);
        assert!(!scheduler.has_active_animations());
        assert!(!scheduler.cancel(AnimationId::default()));
    }
}
