//! 緯度経度の測地系変換
//!
//! 物件データは世界測地系（WGS84）、HOME'S側は日本測地系の度分秒表記。
//! 変換は定数項つきの一次近似式で行う。誤差は1秒未満で、秒単位で
//! 出力する本用途には十分。

use super::text::sanitize;

/// 世界測地系の緯度経度を日本測地系の度分秒セルへ変換する
///
/// どちらかが0以下（未設定）の場合は空文字。
pub fn lat_lng_cell(w_lat: f64, w_lng: f64) -> String {
    if w_lat <= 0.0 || w_lng <= 0.0 {
        return String::new();
    }

    let (t_lat, t_lng) = wgs84_to_tokyo(w_lat, w_lng);
    sanitize(&format!("{}/{}", degree_to_dms(t_lat), degree_to_dms(t_lng)))
}

/// WGS84 → 日本測地系（Tokyo Datum）の近似変換
fn wgs84_to_tokyo(lat: f64, lng: f64) -> (f64, f64) {
    let t_lat = lat + 0.000106961 * lat - 0.000017467 * lng - 0.004602017;
    let t_lng = lng + 0.000046047 * lat + 0.000083049 * lng - 0.010041046;
    (t_lat, t_lng)
}

/// 度を「度.分.秒.ミリ秒」表記へ変換する
fn degree_to_dms(value: f64) -> String {
    let d = value.trunc();
    let rest = (value - d) * 60.0;
    let m = rest.trunc();
    let rest = (rest - m) * 60.0;
    let s = rest.trunc();
    let ms = ((rest - s) * 1000.0).trunc();

    format!("{}.{}.{}.{}", d as i64, m as i64, s as i64, ms as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_to_dms() {
        // 35.5度 = 35度30分0秒
        assert_eq!(degree_to_dms(35.5), "35.30.0.0");
    }

    #[test]
    fn test_missing_coordinates_are_blank() {
        assert_eq!(lat_lng_cell(0.0, 135.0), "");
        assert_eq!(lat_lng_cell(35.0, 0.0), "");
        assert_eq!(lat_lng_cell(0.0, 0.0), "");
    }

    #[test]
    fn test_cell_format() {
        let cell = lat_lng_cell(35.003, 135.759);
        // 「度.分.秒.ミリ秒/度.分.秒.ミリ秒」の形
        let parts: Vec<&str> = cell.split('/').collect();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].split('.').count(), 4);
        assert_eq!(parts[1].split('.').count(), 4);
    }

    #[test]
    fn test_tokyo_datum_shifts_south_east() {
        // 日本測地系の数値は緯度が小さく経度が大きくなる
        let (t_lat, t_lng) = wgs84_to_tokyo(35.0, 135.0);
        assert!(t_lat < 35.0);
        assert!(t_lng > 135.0);
    }
}
