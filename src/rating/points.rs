use super::types::{Outcome, RatingValue};

// (exclusive upper bound of the rating difference, points)
const FAVORITE_BANDS: &[(RatingValue, RatingValue)] = &[
    (13, 8),
    (38, 7),
    (63, 6),
    (88, 5),
    (113, 4),
    (138, 3),
    (188, 2),
    (238, 1),
];
const FAVORITE_FLOOR: RatingValue = 0;

const UPSET_BANDS: &[(RatingValue, RatingValue)] = &[
    (13, 8),
    (38, 10),
    (63, 13),
    (88, 16),
    (113, 20),
    (138, 25),
    (163, 30),
    (188, 35),
    (213, 40),
    (238, 45),
];
const UPSET_CEILING: RatingValue = 50;

/// Point change for one match, computed from session-start ratings.
///
/// Positive when the winner was rated at least as high as the loser, negative
/// for an upset. Either way the winner gains the magnitude and the loser
/// loses it. A tie moves nothing.
pub fn rating_delta(
    winner_rating: RatingValue,
    loser_rating: RatingValue,
    outcome: Outcome,
) -> RatingValue {
    if outcome == Outcome::Tie {
        return 0;
    }

    let difference = winner_rating - loser_rating;
    if difference >= 0 {
        favorite_gain(difference)
    } else {
        -upset_gain(-difference)
    }
}

fn favorite_gain(difference: RatingValue) -> RatingValue {
    lookup_band(FAVORITE_BANDS, difference).unwrap_or(FAVORITE_FLOOR)
}

fn upset_gain(difference: RatingValue) -> RatingValue {
    lookup_band(UPSET_BANDS, difference).unwrap_or(UPSET_CEILING)
}

fn lookup_band(
    bands: &[(RatingValue, RatingValue)],
    difference: RatingValue,
) -> Option<RatingValue> {
    bands
        .iter()
        .find(|(upper, _)| difference < *upper)
        .map(|&(_, points)| points)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn favorite(diff: RatingValue) -> RatingValue {
        rating_delta(1000 + diff, 1000, Outcome::Win)
    }

    fn upset(diff: RatingValue) -> RatingValue {
        rating_delta(1000, 1000 + diff, Outcome::Win)
    }

    #[test]
    fn favorite_staircase_boundaries() {
        let cases = [
            (1, 8),
            (12, 8),
            (13, 7),
            (37, 7),
            (38, 6),
            (62, 6),
            (63, 5),
            (87, 5),
            (88, 4),
            (112, 4),
            (113, 3),
            (137, 3),
            (138, 2),
            (187, 2),
            (188, 1),
            (237, 1),
            (238, 0),
            (900, 0),
        ];
        for (diff, expected) in cases {
            assert_eq!(favorite(diff), expected, "favorite at diff {diff}");
        }
    }

    #[test]
    fn upset_staircase_boundaries() {
        let cases = [
            (1, 8),
            (12, 8),
            (13, 10),
            (37, 10),
            (38, 13),
            (62, 13),
            (63, 16),
            (87, 16),
            (88, 20),
            (112, 20),
            (113, 25),
            (137, 25),
            (138, 30),
            (163, 35),
            (188, 40),
            (213, 45),
            (237, 45),
            (238, 50),
            (1500, 50),
        ];
        for (diff, expected) in cases {
            assert_eq!(upset(diff), -expected, "upset at diff {diff}");
        }
    }

    #[test]
    fn upset_by_twelve_points() {
        assert_eq!(rating_delta(1000, 1012, Outcome::Win), -8);
    }

    #[test]
    fn literal_rating_pairs() {
        assert_eq!(rating_delta(1113, 1000, Outcome::Win), 3);
        assert_eq!(rating_delta(238, 0, Outcome::Win), 0);
        assert_eq!(rating_delta(237, 0, Outcome::Win), 1);
    }

    #[test]
    fn ties_never_move_ratings() {
        for (a, b) in [(1500, 1500), (1800, 1200), (900, 2100)] {
            assert_eq!(rating_delta(a, b, Outcome::Tie), 0);
        }
    }

    #[test]
    fn same_inputs_same_answer() {
        assert_eq!(
            rating_delta(1432, 1377, Outcome::Win),
            rating_delta(1432, 1377, Outcome::Win)
        );
    }

    #[test]
    fn equal_ratings_pay_eight_either_way() {
        assert_eq!(rating_delta(1500, 1500, Outcome::Win), 8);
    }
}
