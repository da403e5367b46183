// In crates/strategies/src/rolling.rs

/// Trailing rolling mean over exactly `window` values.
///
/// Entry `i` is the mean of `values[i + 1 - window ..= i]`. It is `None` while
/// fewer than `window` values are available and whenever the window holds a
/// missing value; partial windows are never averaged.
///
/// The window total is kept as a running sum: each step subtracts the value
/// leaving the window and adds the one entering it, both with Kahan
/// compensation (tracked separately for adds and removes). A window made of
/// one repeated value yields that value exactly, and a window whose values
/// share a sign never gets a mean of the opposite sign.
///
/// A `window` of zero yields no defined means.
pub fn rolling_mean(values: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    if window == 0 {
        return vec![None; values.len()];
    }

    let mut sum = WindowSum::default();
    let mut means = Vec::with_capacity(values.len());

    for i in 0..values.len() {
        let start = (i + 1).saturating_sub(window);

        // The previous window ended at `i`; when this one starts there too
        // nothing carries over, so rebuild from scratch.
        if i == 0 || start >= i {
            sum.reset(values[start]);
            for value in &values[start..=i] {
                sum.add(*value);
            }
        } else {
            let prev_start = i.saturating_sub(window);
            for value in &values[prev_start..start] {
                sum.remove(*value);
            }
            sum.add(values[i]);
        }

        means.push(sum.mean(window));
    }

    means
}

/// Running, compensated total of the defined values in a window.
#[derive(Debug, Default)]
struct WindowSum {
    nobs: usize,
    total: f64,
    negatives: usize,
    compensation_add: f64,
    compensation_remove: f64,
    // Length of the current run of identical added values.
    same_value_run: usize,
    prev_value: Option<f64>,
}

impl WindowSum {
    fn reset(&mut self, first: Option<f64>) {
        *self = Self {
            prev_value: first,
            ..Self::default()
        };
    }

    fn add(&mut self, value: Option<f64>) {
        let Some(value) = value else {
            return;
        };

        self.nobs += 1;
        let y = value - self.compensation_add;
        let t = self.total + y;
        self.compensation_add = t - self.total - y;
        self.total = t;

        if value.is_sign_negative() {
            self.negatives += 1;
        }

        if self.prev_value == Some(value) {
            self.same_value_run += 1;
        } else {
            self.same_value_run = 1;
        }
        self.prev_value = Some(value);
    }

    fn remove(&mut self, value: Option<f64>) {
        let Some(value) = value else {
            return;
        };

        self.nobs -= 1;
        let y = -value - self.compensation_remove;
        let t = self.total + y;
        self.compensation_remove = t - self.total - y;
        self.total = t;

        if value.is_sign_negative() {
            self.negatives -= 1;
        }
    }

    fn mean(&self, min_periods: usize) -> Option<f64> {
        if self.nobs == 0 || self.nobs < min_periods {
            return None;
        }

        if self.same_value_run >= self.nobs {
            return self.prev_value;
        }

        let mean = self.total / self.nobs as f64;
        if (self.negatives == 0 && mean < 0.0) || (self.negatives == self.nobs && mean > 0.0) {
            return Some(0.0);
        }
        Some(mean)
    }
}

/// Strict `>` where an undefined operand makes the comparison false.
pub fn exceeds(value: Option<f64>, threshold: Option<f64>) -> bool {
    match (value, threshold) {
        (Some(v), Some(t)) => v > t,
        _ => false,
    }
}
