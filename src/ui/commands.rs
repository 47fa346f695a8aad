/// Side effects requested by a state transition, executed by the event
/// loop (the transition functions themselves never touch the network or
/// the clock).
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    None,
    /// Arm the debounce window; the loop fires `DebounceElapsed` once the
    /// input has been quiet for the full window.
    ScheduleFetch,
    /// Issue a fetch for the current debounced term via the request gate.
    ExecuteFetch,
    /// Arm the status auto-clear timer (delay in milliseconds).
    ScheduleClearStatus(u64),
    Quit,
}
