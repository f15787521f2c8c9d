use ndarray::{Array2, ArrayView2, Zip};

use crate::equalization_map::EqualizationMap;

/// Applies the equalization table to every pixel, returning a new buffer of
/// the same shape. `image` is left untouched. Table entries are already
/// saturated into `[0, 255]` when the map is built.
pub fn remap(image: &ArrayView2<u8>, map: &EqualizationMap) -> Array2<u8> {
    image.mapv(|v| map.lookup(v))
}

/// Parallel variant of [`remap`]; pixels are independent so the output is identical.
pub fn remap_par(image: &ArrayView2<u8>, map: &EqualizationMap) -> Array2<u8> {
    Zip::from(image).par_map_collect(|&v| map.lookup(v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::histogram::{CumulativeHistogram, Histogram};
    use ndarray::{array, s};

    fn map_for(image: &ArrayView2<u8>) -> EqualizationMap {
        let hist = Histogram::from_image(image);
        EqualizationMap::new(&hist, &CumulativeHistogram::from_histogram(&hist)).unwrap()
    }

    #[test]
    fn four_level_image() {
        let img = array![[0u8, 85], [170, 255]];
        let map = map_for(&img.view());
        let out = remap(&img.view(), &map);
        assert_eq!(out, array![[64u8, 128], [191, 255]]);
        assert_eq!(img, array![[0u8, 85], [170, 255]]);
    }

    #[test]
    fn parallel_matches_sequential() {
        let img = Array2::from_shape_fn((61, 45), |(y, x)| (40 + (y + 2 * x) % 60) as u8);
        let map = map_for(&img.view());
        assert_eq!(remap(&img.view(), &map), remap_par(&img.view(), &map));
    }

    #[test]
    fn keeps_shape_of_sliced_views() {
        let img = Array2::from_shape_fn((20, 30), |(y, x)| (y * 30 + x) as u8);
        let view = img.slice(s![2..9, ..;4]);
        let map = map_for(&view);
        let out = remap_par(&view, &map);
        assert_eq!(out.dim(), view.dim());
        assert_eq!(out[[0, 1]], map.lookup(view[[0, 1]]));
    }
}
