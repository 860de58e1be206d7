//! Form-value encoders matching the input layout the shipped model was
//! trained on.
//!
//! The layout is `[gender, age, city, stay, marital]` followed by a
//! 20-bucket occupation one-hot and a 21-bucket product-category one-hot.
//! Nothing here validates that layout against the model dump; the widget
//! bounds in the UI keep the inputs inside the encoded ranges.

use crate::constants::{AGE_THRESHOLD, CATEGORY_BUCKETS, FEATURE_LEN, OCCUPATION_BUCKETS};
use crate::types::{CityCategory, Gender, QueryForm, StayYears};

/// Indicator vector with a single `1.0` at `value`.
///
/// `value` is expected to be below `cardinality`; out-of-range values
/// saturate to the last bucket.
pub fn one_hot(value: usize, cardinality: usize) -> Vec<f32> {
    debug_assert!(value < cardinality, "one-hot value {value} out of {cardinality} buckets");
    let index = value.min(cardinality.saturating_sub(1));
    let mut out = vec![0.0; cardinality];
    if let Some(slot) = out.get_mut(index) {
        *slot = 1.0;
    }
    out
}

pub fn encode_gender(gender: Gender) -> f32 {
    match gender {
        Gender::Male => 0.0,
        Gender::Female => 1.0,
    }
}

pub fn encode_age(age: u32) -> f32 {
    if age >= AGE_THRESHOLD {
        0.0
    } else {
        1.0
    }
}

pub fn encode_city(city: CityCategory) -> f32 {
    match city {
        CityCategory::C => 0.0,
        CityCategory::A | CityCategory::B => 1.0,
    }
}

pub fn encode_stay(stay: StayYears) -> f32 {
    match stay {
        StayYears::FourPlus => 0.0,
        _ => 1.0,
    }
}

/// Assemble the single-row feature vector for a custom-example query.
pub fn feature_vector(form: &QueryForm) -> Vec<f32> {
    let mut features = Vec::with_capacity(FEATURE_LEN);
    features.push(encode_gender(form.gender));
    features.push(encode_age(form.age));
    features.push(encode_city(form.city));
    features.push(encode_stay(form.stay));
    features.push(if form.married { 1.0 } else { 0.0 });
    features.extend(one_hot(form.occupation as usize, OCCUPATION_BUCKETS));
    features.extend(one_hot(form.category as usize, CATEGORY_BUCKETS));
    features
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_hot_sets_exactly_one_indicator() {
        for buckets in [OCCUPATION_BUCKETS, CATEGORY_BUCKETS] {
            for value in 0..buckets {
                let vector = one_hot(value, buckets);
                assert_eq!(vector.len(), buckets);
                assert_eq!(vector.iter().filter(|&&v| v == 1.0).count(), 1);
                assert_eq!(vector.iter().filter(|&&v| v == 0.0).count(), buckets - 1);
                assert_eq!(vector[value], 1.0);
            }
        }
    }

    #[test]
    fn occupation_five_maps_to_index_five() {
        let expected = [
            0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
            0.0, 0.0, 0.0,
        ];
        assert_eq!(one_hot(5, OCCUPATION_BUCKETS), expected);
    }

    #[test]
    fn age_thresholds_at_fifty_five() {
        assert_eq!(encode_age(60), 0.0);
        assert_eq!(encode_age(55), 0.0);
        assert_eq!(encode_age(30), 1.0);
        assert_eq!(encode_age(54), 1.0);
    }

    #[test]
    fn city_c_is_zero_others_one() {
        assert_eq!(encode_city(CityCategory::C), 0.0);
        assert_eq!(encode_city(CityCategory::A), 1.0);
        assert_eq!(encode_city(CityCategory::B), 1.0);
    }

    #[test]
    fn stay_four_plus_is_zero() {
        assert_eq!(encode_stay(StayYears::FourPlus), 0.0);
        assert_eq!(encode_stay(StayYears::One), 1.0);
        assert_eq!(encode_stay(StayYears::Three), 1.0);
    }

    #[test]
    fn gender_encoding() {
        assert_eq!(encode_gender(Gender::Male), 0.0);
        assert_eq!(encode_gender(Gender::Female), 1.0);
    }

    #[test]
    fn feature_vector_layout() {
        let form = QueryForm {
            gender: Gender::Female,
            age: 60,
            city: CityCategory::C,
            stay: StayYears::FourPlus,
            married: true,
            occupation: 5,
            category: 20,
        };
        let features = feature_vector(&form);
        assert_eq!(features.len(), FEATURE_LEN);
        assert_eq!(&features[..5], &[1.0, 0.0, 0.0, 0.0, 1.0]);
        // Occupation block
        assert_eq!(features[5 + 5], 1.0);
        assert_eq!(features[5..5 + OCCUPATION_BUCKETS].iter().sum::<f32>(), 1.0);
        // Category block
        assert_eq!(features[5 + OCCUPATION_BUCKETS + 20], 1.0);
        assert_eq!(
            features[5 + OCCUPATION_BUCKETS..].iter().sum::<f32>(),
            1.0
        );
    }
}
