// ==========================================
// 喪葬擇日引擎 - 黄历词汇繁体归一
// ==========================================
// 覆盖范围: tyme 输出的宜忌事项、节气名、生肖名
// 干支字与月名、日名在简繁体中相同或由本库直接以繁体生成，不在表内
// ==========================================

/// (简体, 繁体) 逐字对照
const CHAR_PAIRS: &[(char, char)] = &[
    // 宜忌事项
    ('开', '開'), ('绘', '繪'), ('齐', '齊'), ('斋', '齋'), ('庙', '廟'),
    ('谢', '謝'), ('订', '訂'), ('纳', '納'), ('问', '問'), ('归', '歸'),
    ('帐', '帳'), ('进', '進'), ('坟', '墳'), ('启', '啟'), ('钻', '鑽'),
    ('寿', '壽'), ('殓', '殮'), ('门', '門'), ('动', '動'), ('竖', '豎'),
    ('坏', '壞'), ('补', '補'), ('厕', '廁'), ('盖', '蓋'), ('仓', '倉'),
    ('涂', '塗'), ('桥', '橋'), ('筑', '築'), ('扫', '掃'), ('饰', '飾'),
    ('墙', '牆'), ('挂', '掛'), ('财', '財'), ('买', '買'), ('车', '車'),
    ('产', '產'), ('货', '貨'), ('机', '機'), ('经', '經'), ('络', '絡'),
    ('酝', '醞'), ('酿', '釀'), ('铸', '鑄'), ('渔', '漁'), ('结', '結'),
    ('网', '網'), ('养', '養'), ('习', '習'), ('艺', '藝'), ('学', '學'),
    ('发', '髮'), ('见', '見'), ('贵', '貴'), ('针', '針'), ('头', '頭'),
    ('猎', '獵'), ('会', '會'), ('亲', '親'), ('医', '醫'), ('词', '詞'),
    ('讼', '訟'), ('库', '庫'), ('疗', '療'), ('诸', '諸'), ('馀', '餘'),
    ('丧', '喪'), ('断', '斷'), ('蚁', '蟻'), ('无', '無'), ('种', '種'),
    // 节气
    ('谷', '穀'), ('满', '滿'), ('处', '處'), ('惊', '驚'), ('蛰', '蟄'),
    // 生肖
    ('龙', '龍'), ('马', '馬'), ('鸡', '雞'), ('猪', '豬'),
];

fn convert_char(c: char) -> char {
    CHAR_PAIRS
        .iter()
        .find(|(simplified, _)| *simplified == c)
        .map_or(c, |(_, traditional)| *traditional)
}

/// 黄历词汇简体 → 繁体；表外字符原样保留
pub fn to_traditional(text: &str) -> String {
    text.chars().map(convert_char).collect()
}
