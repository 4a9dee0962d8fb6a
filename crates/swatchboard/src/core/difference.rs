use crate::Float;

/// Compute the perceptual distance between the two OKLab coordinate triples,
/// which is the Euclidean distance in that color space.
#[allow(non_snake_case)]
pub(crate) fn delta_e_ok(coordinates1: &[Float; 3], coordinates2: &[Float; 3]) -> Float {
    let [L1, a1, b1] = coordinates1;
    let [L2, a2, b2] = coordinates2;

    let ΔL = L1 - L2;
    let Δa = a1 - a2;
    let Δb = b1 - b2;

    ΔL.mul_add(ΔL, Δa.mul_add(Δa, Δb * Δb)).sqrt()
}

/// Find the candidate closest to the given coordinates under the given
/// distance metric, returning its index and distance.
///
/// Candidates are compared with a strict less-than, so amongst equidistant
/// candidates the earliest one wins. An empty iterator yields `None`.
pub(crate) fn find_closest<'c, C, F>(
    coordinates: &[Float; 3],
    candidates: C,
    mut compute_distance: F,
) -> Option<(usize, Float)>
where
    C: IntoIterator<Item = &'c [Float; 3]>,
    F: FnMut(&[Float; 3], &[Float; 3]) -> Float,
{
    let mut closest_index = None;
    let mut minimum_distance = Float::INFINITY;

    for (index, candidate) in candidates.into_iter().enumerate() {
        let distance = compute_distance(coordinates, candidate);
        if distance < minimum_distance {
            closest_index = Some(index);
            minimum_distance = distance;
        }
    }

    closest_index.map(|index| (index, minimum_distance))
}

// ====================================================================================================================
