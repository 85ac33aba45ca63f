//! Whole-pipeline tests: sensor flows through stages into actuators.

use fw_core::State;
use fw_flow::{Average, Flow, Log, Pull, Threshold, Wheel};

use fw_devices::{Device, Level, MemoryPin, Mock, Pwm, Touch};

#[test]
fn averaged_mock_produces_windowed_means() {
    let mut mock = Mock::new(vec![10.0, 20.0, 30.0]).unwrap();
    let mut flow = mock.states(None, false).pipe(Average::new(3).unwrap());

    assert_eq!(flow.pull().unwrap(), Pull::Suppressed);
    assert_eq!(flow.pull().unwrap(), Pull::Suppressed);
    assert_eq!(flow.pull().unwrap(), Pull::Ready(State::of(20.0)));
    // Cycle restarts at 10; window 20, 30, 10 keeps the same mean.
    assert_eq!(flow.pull().unwrap(), Pull::Ready(State::of(20.0)));
}

#[test]
fn actuator_sink_applies_forwarded_states() {
    let mut mock = Mock::new(vec![10.0, 20.0, 30.0]).unwrap();
    let upstream = mock
        .states(None, false)
        .pipe(Log::new())
        .pipe(Average::new(3).unwrap());

    let mut level = Level::new(MemoryPin::new(13));
    let mut sink = level.iterate(upstream, true);

    // Cold start propagates as suppression, not as pipeline death.
    assert_eq!(sink.pull().unwrap(), Pull::Suppressed);
    assert_eq!(sink.pull().unwrap(), Pull::Suppressed);
    assert_eq!(sink.pull().unwrap(), Pull::Ready(State::of(20.0)));
    drop(sink);

    assert_eq!(level.value(), Some(20.0));
    assert_eq!(level.pin().raw(), 1);
    assert_eq!(level.pin().writes(), 1);
}

#[test]
fn sink_without_commit_updates_state_only() {
    let mut mock = Mock::new(vec![1.0]).unwrap();
    let upstream = mock.states(Some(1), false);

    let mut level = Level::new(MemoryPin::new(13));
    {
        let mut sink = level.iterate(upstream, false);
        assert!(sink.pull().unwrap().is_ready());
    }
    assert_eq!(level.value(), Some(1.0));
    assert_eq!(level.pin().writes(), 0);
}

#[test]
fn touch_drives_pwm_duty() {
    let mut touch = Touch::new(MemoryPin::new(4).with_raw(512));
    let upstream = touch.states(Some(1), false);

    let mut pwm = Pwm::new(MemoryPin::new(16));
    {
        let mut sink = pwm.iterate(upstream, true);
        assert!(sink.pull().unwrap().is_ready());
    }
    assert_eq!(pwm.pin().raw(), 512);
    assert_eq!(pwm.pin().writes(), 1);
}

#[test]
fn sink_remains_composable_downstream() {
    let mut mock = Mock::new(vec![0.9]).unwrap();
    let upstream = mock.states(Some(1), false);

    let mut pwm = Pwm::new(MemoryPin::new(16));
    let values: Vec<f64> = pwm
        .iterate(upstream, true)
        .pipe(Threshold::new(0.5).unwrap())
        .iter()
        .map(|s| s.unwrap().value.unwrap())
        .collect();
    assert_eq!(values, vec![0.9]);
}

#[test]
fn bounded_alarm_chain_counts_exceedances() {
    let mut mock = Mock::new(vec![0.1, 0.8, 0.2, 0.9]).unwrap();
    let exceedances = mock
        .states(Some(8), false)
        .pipe(Threshold::new(0.5).unwrap())
        .iter()
        .count();
    assert_eq!(exceedances, 4);
}
