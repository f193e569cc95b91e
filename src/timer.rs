// Boggler – A solver for word-search dice puzzles
// Copyright (C) 2026  The Boggler authors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use chrono::{DateTime, Duration, Utc};

pub struct Timer {
    start: DateTime<Utc>,
}

impl Timer {
    pub fn start() -> Timer {
        Timer { start: Utc::now() }
    }

    pub fn elapsed(&self) -> Duration {
        Utc::now() - self.start
    }
}

pub fn milliseconds(duration: Duration) -> f64 {
    match duration.num_microseconds() {
        Some(us) => us as f64 / 1000.0,
        None => duration.num_milliseconds() as f64,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn elapsed_is_not_negative() {
        let timer = Timer::start();
        std::thread::sleep(std::time::Duration::from_millis(2));
        assert!(timer.elapsed() >= Duration::zero());
    }

    #[test]
    fn to_milliseconds() {
        assert_eq!(milliseconds(Duration::microseconds(1500)), 1.5);
        assert_eq!(milliseconds(Duration::seconds(2)), 2000.0);
        assert_eq!(milliseconds(Duration::zero()), 0.0);
    }
}
