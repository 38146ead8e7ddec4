//! Integration tests for allophone playback
//!
//! Drives the speaker with devices that take time to finish each allophone,
//! the way a real chip holds standby low while speaking.

use retrospeak::speech::allophones;
use retrospeak::speech::speaker::QUEUE_CAPACITY;
use retrospeak::speech::{AllophoneDevice, DryRunDevice, Speaker};
use retrospeak::Translator;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

/// Device that stays busy for a fixed time after each load, or for as long
/// as it is held
#[derive(Clone)]
struct SlowDevice {
    busy_for: Duration,
    held: Arc<AtomicBool>,
    loaded_at: Arc<Mutex<Option<Instant>>>,
    loaded: Arc<Mutex<Vec<u8>>>,
}

impl SlowDevice {
    fn new(busy_for: Duration) -> Self {
        Self {
            busy_for,
            held: Arc::new(AtomicBool::new(false)),
            loaded_at: Arc::new(Mutex::new(None)),
            loaded: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl AllophoneDevice for SlowDevice {
    fn set_clock(&mut self, _mhz: f32) -> retrospeak::Result<()> {
        Ok(())
    }

    fn load(&mut self, address: u8) -> retrospeak::Result<()> {
        *self.loaded_at.lock().unwrap() = Some(Instant::now());
        self.loaded.lock().unwrap().push(address);
        Ok(())
    }

    fn is_standby(&mut self) -> retrospeak::Result<bool> {
        if self.held.load(Ordering::SeqCst) {
            return Ok(false);
        }
        Ok(self
            .loaded_at
            .lock()
            .unwrap()
            .map_or(true, |at| at.elapsed() >= self.busy_for))
    }

    fn reset(&mut self) -> retrospeak::Result<()> {
        Ok(())
    }

    fn disable(&mut self) -> retrospeak::Result<()> {
        Ok(())
    }
}

#[test]
fn test_translated_text_reaches_device() {
    let translator = Translator::english();
    let device = SlowDevice::new(Duration::from_millis(1));
    let speaker = Speaker::new(Box::new(device.clone()), 3.12).unwrap();

    let text = translator.translate("hello cat").unwrap();
    speaker.speak_list(text.as_slice());
    speaker.wait();

    let expected: Vec<u8> = text
        .iter()
        .map(|a| allophones::address(a).unwrap())
        .collect();
    assert_eq!(*device.loaded.lock().unwrap(), expected);
}

#[test]
fn test_is_speaking_while_busy() {
    let device = SlowDevice::new(Duration::from_millis(50));
    let speaker = Speaker::new(Box::new(device), 3.12).unwrap();

    speaker.speak("AA AA AA");
    assert!(speaker.is_speaking());
    speaker.wait();
    assert!(!speaker.is_speaking());
}

#[test]
fn test_stop_drops_queued_allophones() {
    let device = SlowDevice::new(Duration::from_millis(30));
    let speaker = Speaker::new(Box::new(device.clone()), 3.12).unwrap();

    speaker.speak(&"AA ".repeat(50));
    thread::sleep(Duration::from_millis(40));
    speaker.stop();

    assert!(!speaker.is_speaking());
    let spoken = device.loaded.lock().unwrap().len();
    assert!(spoken < 50, "spoke {} allophones", spoken);
}

#[test]
fn test_on_stop_fires_once_per_phrase() {
    let device = SlowDevice::new(Duration::from_millis(2));
    let speaker = Speaker::new(Box::new(device), 3.12).unwrap();

    let stops = Arc::new(Mutex::new(0));
    let count = Arc::clone(&stops);
    speaker.on_stop(move || *count.lock().unwrap() += 1);

    speaker.speak_and_wait("HH1 EH LL OW");
    speaker.speak_and_wait("PA4 OY");
    assert_eq!(*stops.lock().unwrap(), 2);
}

#[test]
fn test_dry_run_device_drains() {
    let speaker = Speaker::new(Box::new(DryRunDevice::new(0)), 3.12).unwrap();
    speaker.speak_and_wait("DH1 PA3 IY PA4");
    assert!(!speaker.is_speaking());
}

/// More allophones than the queue holds, cycling through the whole set
fn long_phrase() -> Vec<String> {
    allophones::names()
        .into_iter()
        .cycle()
        .take(QUEUE_CAPACITY + 100)
        .map(str::to_string)
        .collect()
}

#[test]
fn test_full_queue_blocks_and_keeps_order() {
    let device = SlowDevice::new(Duration::ZERO);
    device.held.store(true, Ordering::SeqCst);
    let speaker = Arc::new(Speaker::new(Box::new(device.clone()), 3.12).unwrap());

    let phrase = long_phrase();
    let expected: Vec<u8> = phrase
        .iter()
        .map(|a| allophones::address(a).unwrap())
        .collect();

    let (done, queued) = mpsc::channel();
    let producer = {
        let speaker = Arc::clone(&speaker);
        let phrase = phrase.clone();
        thread::spawn(move || {
            speaker.speak_list(phrase.as_slice());
            done.send(()).unwrap();
        })
    };

    // The chip is busy, so the queue fills and speak_list blocks
    assert!(queued.recv_timeout(Duration::from_millis(300)).is_err());
    assert!(speaker.is_speaking());
    assert!(device.loaded.lock().unwrap().len() <= 1);

    device.held.store(false, Ordering::SeqCst);
    loop {
        let speaking = speaker.is_speaking();
        let spoken = device.loaded.lock().unwrap().len();
        if spoken == expected.len() {
            break;
        }
        assert!(speaking, "went quiet after {} of {}", spoken, expected.len());
        thread::sleep(Duration::from_millis(1));
    }

    queued
        .recv_timeout(Duration::from_secs(5))
        .expect("speak_list stayed blocked");
    producer.join().unwrap();
    speaker.wait();
    assert!(!speaker.is_speaking());
    assert_eq!(*device.loaded.lock().unwrap(), expected);
}

#[test]
fn test_stop_releases_blocked_speak() {
    let device = SlowDevice::new(Duration::ZERO);
    device.held.store(true, Ordering::SeqCst);
    let speaker = Arc::new(Speaker::new(Box::new(device.clone()), 3.12).unwrap());

    let (done, queued) = mpsc::channel();
    let producer = {
        let speaker = Arc::clone(&speaker);
        thread::spawn(move || {
            speaker.speak_list(long_phrase().as_slice());
            done.send(()).unwrap();
        })
    };
    assert!(queued.recv_timeout(Duration::from_millis(100)).is_err());

    let (stopped, stop_done) = mpsc::channel();
    {
        let speaker = Arc::clone(&speaker);
        thread::spawn(move || {
            speaker.stop();
            stopped.send(()).unwrap();
        });
    }

    queued
        .recv_timeout(Duration::from_secs(5))
        .expect("speak_list stayed blocked after stop");
    stop_done
        .recv_timeout(Duration::from_secs(5))
        .expect("stop did not return");
    producer.join().unwrap();

    assert!(!speaker.is_speaking());
    assert!(device.loaded.lock().unwrap().len() < QUEUE_CAPACITY);
}
