use crate::time::TimeValue;

pub const DEFAULT_STRETCH_REST: u64 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stretch {
    /// Free-form tag such as `calf` or `hips`; not limited to the volume groups.
    pub group: String,
    pub name: String,
    pub hold: TimeValue,
    pub unilateral: bool,
    pub rest: TimeValue,
}

impl Stretch {
    pub fn new(group: impl Into<String>, name: impl Into<String>, hold: u64) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            hold: TimeValue::from_seconds(hold),
            unilateral: false,
            rest: TimeValue::from_seconds(DEFAULT_STRETCH_REST),
        }
    }

    pub fn unilateral(mut self) -> Self {
        self.unilateral = true;
        self
    }

    pub fn with_rest(mut self, seconds: u64) -> Self {
        self.rest = TimeValue::from_seconds(seconds);
        self
    }

    /// Hold plus rest, once per side.
    pub fn time(&self) -> TimeValue {
        let sides = if self.unilateral { 2 } else { 1 };
        (self.hold + self.rest) * sides
    }

    pub fn checked_time(&self) -> Option<TimeValue> {
        let sides = if self.unilateral { 2 } else { 1 };
        self.hold.checked_add(self.rest)?.checked_mul(sides)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StretchingRoutine {
    pub name: String,
    pub stretches: Vec<Stretch>,
    pub repeat: u32,
}

impl StretchingRoutine {
    pub fn new(name: impl Into<String>, stretches: Vec<Stretch>) -> Self {
        Self {
            name: name.into(),
            stretches,
            repeat: 1,
        }
    }

    pub fn with_repeat(mut self, repeat: u32) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn time(&self) -> TimeValue {
        let once: TimeValue = self.stretches.iter().map(Stretch::time).sum();
        once * u64::from(self.repeat)
    }

    pub fn checked_time(&self) -> Option<TimeValue> {
        self.stretches
            .iter()
            .try_fold(TimeValue::ZERO, |total, s| total.checked_add(s.checked_time()?))?
            .checked_mul(u64::from(self.repeat))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unilateral_stretch_doubles() {
        let s = Stretch::new("calf", "Gastrocnemius stretch", 30).unilateral();
        assert_eq!(s.time().seconds(), 70);
    }

    #[test]
    fn bilateral_stretch_counts_once() {
        let s = Stretch::new("calf", "Shin stretch", 30);
        assert_eq!(s.time().seconds(), 35);
        let s = s.with_rest(10);
        assert_eq!(s.time().seconds(), 40);
    }

    #[test]
    fn routine_scales_with_repeat() {
        let stretches = vec![
            Stretch::new("triceps", "OH triceps", 30).unilateral(),
            Stretch::new("biceps", "Standing biceps stretch", 30),
        ];
        let once = StretchingRoutine::new("Upper", stretches);
        assert_eq!(once.repeat, 1);
        assert_eq!(once.time().seconds(), 105);
        assert_eq!(once.with_repeat(3).time().seconds(), 315);
    }

    #[test]
    fn checked_time_reports_overflow() {
        let long = Stretch::new("hips", "Pigeon stretch", u64::MAX / 2).unilateral();
        assert_eq!(long.checked_time(), None);
        let ok = Stretch::new("hips", "Pigeon stretch", 30).unilateral();
        assert_eq!(ok.checked_time(), Some(ok.time()));

        let routine = StretchingRoutine::new("Hips", vec![ok]).with_repeat(u32::MAX);
        assert_eq!(routine.checked_time(), Some(routine.time()));
        let routine = StretchingRoutine::new("Hips", vec![long]);
        assert_eq!(routine.checked_time(), None);
    }

    #[test]
    fn empty_routine_is_zero() {
        let r = StretchingRoutine::new("None", vec![]).with_repeat(4);
        assert_eq!(r.time(), TimeValue::ZERO);
    }
}
