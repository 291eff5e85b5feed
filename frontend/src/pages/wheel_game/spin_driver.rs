use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::Timeout;
use spinwheel_shared::{Roster, SpinOutcome, SpinPlan, Wheel, WheelConfig, WheelError, WheelState};
use yew::Callback;

fn now_ms() -> f64 {
    js_sys::Date::now()
}

struct DriverInner {
    wheel: RefCell<Wheel>,
    frame: RefCell<Option<AnimationFrame>>,
    deadline: RefCell<Option<Timeout>>,
    on_state: Callback<WheelState>,
}

/// Schedules a [`Wheel`] in the browser. Frames sample the eased angle; a
/// deadline timer set past the end of the animation completes the spin even
/// when the tab is backgrounded and frames stop arriving. The wheel itself
/// guarantees the winner is announced once, whichever path gets there first.
///
/// Dropping the last handle cancels any pending frame or timer.
#[derive(Clone)]
pub struct SpinDriver {
    inner: Rc<DriverInner>,
}

impl SpinDriver {
    pub fn new(
        roster: Roster,
        config: WheelConfig,
        on_state: Callback<WheelState>,
        on_winner: Callback<SpinOutcome>,
    ) -> Self {
        let wheel = Wheel::new(roster, config).with_listener(move |outcome| on_winner.emit(outcome.clone()));
        Self {
            inner: Rc::new(DriverInner {
                wheel: RefCell::new(wheel),
                frame: RefCell::new(None),
                deadline: RefCell::new(None),
                on_state,
            }),
        }
    }

    fn from_weak(weak: &Weak<DriverInner>) -> Option<Self> {
        weak.upgrade().map(|inner| Self { inner })
    }

    pub fn is_spinning(&self) -> bool {
        self.inner.wheel.borrow().is_spinning()
    }

    pub fn state(&self) -> WheelState {
        self.inner.wheel.borrow().state()
    }

    pub fn set_roster(&self, roster: Roster) -> Result<(), WheelError> {
        let state = {
            let mut wheel = self.inner.wheel.borrow_mut();
            wheel.set_roster(roster)?;
            wheel.state()
        };
        self.inner.on_state.emit(state);
        Ok(())
    }

    pub fn request_spin(&self) -> Result<SpinPlan, WheelError> {
        let (plan, deadline_ms) = {
            let mut wheel = self.inner.wheel.borrow_mut();
            let plan = wheel.request_spin(&mut rand::thread_rng(), now_ms())?;
            (plan, wheel.config().deadline_ms())
        };

        let weak = Rc::downgrade(&self.inner);
        let deadline = Timeout::new(deadline_ms, move || {
            if let Some(driver) = SpinDriver::from_weak(&weak) {
                driver.on_deadline();
            }
        });
        *self.inner.deadline.borrow_mut() = Some(deadline);

        self.publish();
        self.schedule_frame();
        Ok(plan)
    }

    fn schedule_frame(&self) {
        let weak = Rc::downgrade(&self.inner);
        let frame = request_animation_frame(move |_| {
            if let Some(driver) = SpinDriver::from_weak(&weak) {
                driver.on_frame();
            }
        });
        *self.inner.frame.borrow_mut() = Some(frame);
    }

    fn on_frame(&self) {
        let spinning = {
            let mut wheel = self.inner.wheel.borrow_mut();
            wheel.tick(now_ms());
            wheel.is_spinning()
        };
        self.publish();

        if spinning {
            self.schedule_frame();
        } else {
            self.inner.deadline.borrow_mut().take();
        }
    }

    fn on_deadline(&self) {
        let finished = self.inner.wheel.borrow_mut().finish();
        if finished.is_some() {
            log::warn!("Spin finished by deadline timer, animation frames were throttled");
            self.inner.frame.borrow_mut().take();
            self.publish();
        }
    }

    fn publish(&self) {
        let state = self.state();
        self.inner.on_state.emit(state);
    }
}
