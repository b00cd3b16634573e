//! 文字列整形ヘルパー
//!
//! Shift_JISのCSVセルに安全に収まるよう、出力前のテキストを固定の
//! 置換表で整形する。

/// 出力用文字列のサニタイジング
///
/// ダブルクォートと改行はセルを壊すため必ず置換する。ローマ数字と
/// 異体字（髙・﨑）は受け側で文字化けする実績があるため寄せる。
pub fn sanitize(data: &str) -> String {
    let mut ans = data.replace('"', "”");
    ans = ans.replace("\r\n", " ").replace(['\r', '\n'], " ");

    ans = ans.replace('%', "％").replace('･', "・");
    ans = ans.replace('【', "（").replace('】', "）");
    ans = ans.replace('(', "（").replace(')', "）");

    ans = ans
        .replace('Ⅰ', "I")
        .replace('Ⅱ', "II")
        .replace('Ⅲ', "III")
        .replace('Ⅳ', "IV")
        .replace('Ⅴ', "V")
        .replace('Ⅵ', "VI")
        .replace('Ⅶ', "VII")
        .replace('Ⅷ', "VIII")
        .replace('Ⅸ', "IX")
        .replace('Ⅹ', "X");
    ans = ans.replace('髙', "高").replace('﨑', "崎");

    ans
}

/// 面積の小数第3位以下切り捨て
pub fn floor2(value: f64) -> f64 {
    (value * 100.0).floor() / 100.0
}

/// 浮動小数点の表示正規化（整数値なら小数点を出さない）
pub fn float_normalize(value: f64) -> String {
    if value == value.trunc() {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// 郵便番号の正規化
///
/// 空なら番兵値、ハイフン無しは桁数に応じて補い、最後に8桁まで0で
/// 右詰めする。
pub fn normalize_postal_code(raw: &str) -> String {
    let mut ans = raw.to_string();
    if ans.is_empty() {
        ans = "999-9999".to_string();
    } else if !ans.contains('-') {
        if ans.len() > 4 {
            ans = format!("{}-{}", &ans[..3], &ans[3..]);
        } else if ans.len() == 3 {
            ans = format!("{}-0000", ans);
        }
    }

    let mut ans = sanitize(&ans);
    while ans.len() < 8 {
        ans.push('0');
    }
    ans
}

/// 年月の表示（YYYY/MM、月は0詰め）
pub fn year_month(year: i64, month: i64) -> String {
    format!("{}/{:0>2}", year, month)
}
