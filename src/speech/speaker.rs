//! Background allophone playback
//!
//! Allophones are queued and spoken in order by a worker thread, so callers
//! can carry on while the chip talks. Callbacks fire on the worker thread
//! when a run of speech starts, for each allophone, and when the queue
//! drains. A callback that panics is logged and speech carries on.

use super::allophones;
use super::device::AllophoneDevice;
use crate::Result;
use log::{debug, error, info, warn};
use std::collections::VecDeque;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Maximum queued allophones; `speak` blocks when full
pub const QUEUE_CAPACITY: usize = 500;

pub const MIN_CLOCK_MHZ: f32 = 1.0;
pub const MAX_CLOCK_MHZ: f32 = 5.1;
pub const DEFAULT_CLOCK_MHZ: f32 = 3.12;

/// Longest wait for the chip to finish one allophone
const STANDBY_TIMEOUT: Duration = Duration::from_secs(2);
const STANDBY_POLL: Duration = Duration::from_millis(10);

type Callback = Box<dyn FnMut() + Send>;
type AllophoneCallback = Box<dyn FnMut(&str) + Send>;
type SharedDevice = Arc<Mutex<Box<dyn AllophoneDevice>>>;

/// One registered callback
struct Slot<C> {
    callback: Option<C>,
    /// Bumped whenever this callback is set or cleared
    generation: u64,
}

impl<C> Default for Slot<C> {
    fn default() -> Self {
        Self {
            callback: None,
            generation: 0,
        }
    }
}

impl<C> Slot<C> {
    fn set(&mut self, callback: Option<C>) {
        self.callback = callback;
        self.generation = self.generation.wrapping_add(1);
    }
}

#[derive(Default)]
struct Callbacks {
    on_start: Slot<Callback>,
    on_allophone: Slot<AllophoneCallback>,
    on_stop: Slot<Callback>,
}

fn start_slot(callbacks: &mut Callbacks) -> &mut Slot<Callback> {
    &mut callbacks.on_start
}

fn allophone_slot(callbacks: &mut Callbacks) -> &mut Slot<AllophoneCallback> {
    &mut callbacks.on_allophone
}

fn stop_slot(callbacks: &mut Callbacks) -> &mut Slot<Callback> {
    &mut callbacks.on_stop
}

#[derive(Default)]
struct Queue {
    pending: VecDeque<&'static str>,
    /// Worker is inside a run of speech
    speaking: bool,
    /// Callers part way through queueing a phrase
    filling: usize,
    /// Bumped by `stop`; callers blocked on a full queue give up
    epoch: u64,
    shutdown: bool,
}

#[derive(Default)]
struct Shared {
    queue: Mutex<Queue>,
    /// Signalled on every queue or speaking-state change
    changed: Condvar,
    callbacks: Mutex<Callbacks>,
}

impl Shared {
    fn queue(&self) -> MutexGuard<'_, Queue> {
        self.queue.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn wait<'a>(&self, guard: MutexGuard<'a, Queue>) -> MutexGuard<'a, Queue> {
        self.changed
            .wait(guard)
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn callbacks(&self) -> MutexGuard<'_, Callbacks> {
        self.callbacks.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn set_callbacks(&self, update: impl FnOnce(&mut Callbacks)) {
        let mut callbacks = self.callbacks();
        update(&mut *callbacks);
    }

    /// Run one callback with the callbacks lock released
    ///
    /// The callback is put back afterwards unless it was replaced or cleared
    /// while it ran.
    fn fire<C>(
        &self,
        name: &str,
        slot: fn(&mut Callbacks) -> &mut Slot<C>,
        call: impl FnOnce(&mut C),
    ) {
        let (callback, generation) = {
            let mut callbacks = self.callbacks();
            let slot = slot(&mut callbacks);
            (slot.callback.take(), slot.generation)
        };
        let Some(mut callback) = callback else {
            return;
        };

        if panic::catch_unwind(AssertUnwindSafe(|| call(&mut callback))).is_err() {
            error!("{} callback panicked", name);
        }

        let mut callbacks = self.callbacks();
        let slot = slot(&mut callbacks);
        if slot.generation == generation {
            slot.callback = Some(callback);
        }
    }
}

/// Releases anyone waiting on the queue if the worker unwinds
struct WorkerGuard(Arc<Shared>);

impl Drop for WorkerGuard {
    fn drop(&mut self) {
        if thread::panicking() {
            let mut queue = self.0.queue();
            queue.pending.clear();
            queue.speaking = false;
            queue.shutdown = true;
            self.0.changed.notify_all();
        }
    }
}

enum Step {
    Speak {
        allophone: &'static str,
        starting: bool,
    },
    Finished,
}

fn clamp_clock(mhz: f32) -> f32 {
    if mhz.is_nan() {
        return DEFAULT_CLOCK_MHZ;
    }
    mhz.clamp(MIN_CLOCK_MHZ, MAX_CLOCK_MHZ)
}

fn lock_device(device: &SharedDevice) -> MutexGuard<'_, Box<dyn AllophoneDevice>> {
    device.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Handle for the chip clock
///
/// Cheap to clone and safe to move into callbacks, so the clock can change
/// between allophones while a phrase is being spoken.
#[derive(Clone)]
pub struct ClockControl {
    device: SharedDevice,
    mhz: Arc<Mutex<f32>>,
}

impl ClockControl {
    /// Program the clock; returns the clamped value actually set
    pub fn set(&self, mhz: f32) -> Result<f32> {
        let clock = clamp_clock(mhz);
        lock_device(&self.device).set_clock(clock)?;
        *self.mhz.lock().unwrap_or_else(PoisonError::into_inner) = clock;
        debug!("Clock set to {:.2}MHz", clock);
        Ok(clock)
    }

    /// Current clock in MHz
    pub fn get(&self) -> f32 {
        *self.mhz.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Queued allophone speaker for one device
pub struct Speaker {
    shared: Arc<Shared>,
    device: SharedDevice,
    clock: ClockControl,
    worker: Option<JoinHandle<()>>,
}

impl Speaker {
    /// Start a speaker on `device` at `mhz`
    ///
    /// The clock is clamped to the chip's working range.
    pub fn new(device: Box<dyn AllophoneDevice>, mhz: f32) -> Result<Self> {
        let device: SharedDevice = Arc::new(Mutex::new(device));
        let shared = Arc::new(Shared::default());

        let clock = ClockControl {
            device: Arc::clone(&device),
            mhz: Arc::new(Mutex::new(DEFAULT_CLOCK_MHZ)),
        };
        let mhz = clock.set(mhz)?;
        lock_device(&device).reset()?;

        let worker = {
            let shared = Arc::clone(&shared);
            let device = Arc::clone(&device);
            thread::Builder::new()
                .name("retrospeak-speaker".to_string())
                .spawn(move || run(shared, device))?
        };
        info!("Speaker started at {:.2}MHz", mhz);

        Ok(Self {
            shared,
            device,
            clock,
            worker: Some(worker),
        })
    }

    /// Queue a whitespace-separated allophone string
    ///
    /// Case is ignored and tokens that are not allophones are skipped.
    pub fn speak(&self, text: &str) {
        self.enqueue(text.split_whitespace());
    }

    /// Queue a list of allophones
    pub fn speak_list<S: AsRef<str>>(&self, allophones: &[S]) {
        self.enqueue(allophones.iter().map(|s| s.as_ref()));
    }

    /// Queue allophones and block until they have been spoken
    pub fn speak_and_wait(&self, text: &str) {
        self.speak(text);
        self.wait();
    }

    /// Block until the queue is empty and the last allophone has finished
    pub fn wait(&self) {
        let mut queue = self.shared.queue();
        while (!queue.pending.is_empty() || queue.speaking) && !queue.shutdown {
            queue = self.shared.wait(queue);
        }
    }

    /// True while allophones are queued or being spoken
    pub fn is_speaking(&self) -> bool {
        let queue = self.shared.queue();
        !queue.pending.is_empty() || queue.speaking
    }

    /// Drop queued allophones and wait for the current one to finish
    pub fn stop(&self) {
        {
            let mut queue = self.shared.queue();
            let dropped = queue.pending.len();
            queue.pending.clear();
            queue.epoch = queue.epoch.wrapping_add(1);
            self.shared.changed.notify_all();
            debug!("Stopping speech, dropped {} allophones", dropped);
        }
        self.wait();
    }

    /// Change the chip clock; returns the clamped value actually set
    pub fn set_clock(&self, mhz: f32) -> Result<f32> {
        self.clock.set(mhz)
    }

    /// Current clock in MHz
    pub fn clock(&self) -> f32 {
        self.clock.get()
    }

    /// A clock handle that callbacks can own
    pub fn clock_control(&self) -> ClockControl {
        self.clock.clone()
    }

    /// Called when speech starts after the queue was idle
    pub fn on_start(&self, callback: impl FnMut() + Send + 'static) {
        self.shared
            .set_callbacks(|c| c.on_start.set(Some(Box::new(callback))));
    }

    /// Called with each allophone as it is sent to the chip
    pub fn on_allophone(&self, callback: impl FnMut(&str) + Send + 'static) {
        self.shared
            .set_callbacks(|c| c.on_allophone.set(Some(Box::new(callback))));
    }

    /// Called when the queue drains
    pub fn on_stop(&self, callback: impl FnMut() + Send + 'static) {
        self.shared
            .set_callbacks(|c| c.on_stop.set(Some(Box::new(callback))));
    }

    /// Remove all callbacks
    pub fn clear_callbacks(&self) {
        self.shared.set_callbacks(|c| {
            c.on_start.set(None);
            c.on_allophone.set(None);
            c.on_stop.set(None);
        });
    }

    /// Queue tokens as one run
    ///
    /// Blocks while the queue is full. The worker does not treat the run as
    /// finished until every token is queued, and `stop` abandons the rest.
    fn enqueue<'a>(&self, tokens: impl Iterator<Item = &'a str>) {
        let mut queue = self.shared.queue();
        let epoch = queue.epoch;
        queue.filling += 1;
        for token in tokens {
            let Some(allophone) = allophones::canonical(token) else {
                debug!("Ignoring unknown allophone '{}'", token);
                continue;
            };
            while queue.pending.len() >= QUEUE_CAPACITY
                && queue.epoch == epoch
                && !queue.shutdown
            {
                self.shared.changed.notify_all();
                queue = self.shared.wait(queue);
            }
            if queue.epoch != epoch {
                debug!("Speech stopped while queueing");
                break;
            }
            queue.pending.push_back(allophone);
        }
        queue.filling -= 1;
        self.shared.changed.notify_all();
    }
}

impl Drop for Speaker {
    fn drop(&mut self) {
        self.stop();
        {
            let mut queue = self.shared.queue();
            queue.shutdown = true;
            self.shared.changed.notify_all();
        }
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                error!("Speaker thread panicked");
            }
        }
        if let Err(e) = lock_device(&self.device).disable() {
            error!("Failed to disable device: {}", e);
        }
        info!("Speaker stopped");
    }
}

/// Worker loop: speak queued allophones until shutdown
fn run(shared: Arc<Shared>, device: SharedDevice) {
    let _guard = WorkerGuard(Arc::clone(&shared));
    loop {
        let step = {
            let mut queue = shared.queue();
            loop {
                if queue.shutdown {
                    return;
                }
                if let Some(allophone) = queue.pending.pop_front() {
                    let starting = !queue.speaking;
                    queue.speaking = true;
                    shared.changed.notify_all();
                    break Step::Speak {
                        allophone,
                        starting,
                    };
                }
                if queue.speaking && queue.filling == 0 {
                    break Step::Finished;
                }
                queue = shared.wait(queue);
            }
        };

        match step {
            Step::Speak {
                allophone,
                starting,
            } => {
                if starting {
                    shared.fire("on_start", start_slot, |callback| callback());
                }
                speak_one(&shared, &device, allophone);
            }
            Step::Finished => {
                shared.fire("on_stop", stop_slot, |callback| callback());
                let mut queue = shared.queue();
                queue.speaking = false;
                shared.changed.notify_all();
            }
        }
    }
}

fn speak_one(shared: &Shared, device: &SharedDevice, allophone: &str) {
    let Some(address) = allophones::address(allophone) else {
        return;
    };
    if let Err(e) = lock_device(device).load(address) {
        error!("Failed to load allophone {}: {}", allophone, e);
        return;
    }

    shared.fire("on_allophone", allophone_slot, |callback| callback(allophone));

    let started = Instant::now();
    loop {
        match lock_device(device).is_standby() {
            Ok(true) => return,
            Ok(false) => {}
            Err(e) => {
                warn!("Failed to read standby: {}", e);
                return;
            }
        }
        if started.elapsed() >= STANDBY_TIMEOUT {
            warn!("Timed out waiting for {} to finish", allophone);
            return;
        }
        thread::sleep(STANDBY_POLL);
    }
}
