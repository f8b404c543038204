//! Built-in codepage tables.

use super::{Codepage, CodepageRange as R};

pub const ISO_8859_1: Codepage = Codepage::from_static(
    "ISO-8859-1",
    &[R { low: 0x0000, high: 0x00FF, delta: 0 }],
);

pub const ISO_8859_5: Codepage = Codepage::from_static(
    "ISO-8859-5",
    &[
        R { low: 0x0000, high: 0x00A0, delta: 0 },
        R { low: 0x00A7, high: 0x00A7, delta: 86 },
        R { low: 0x00AD, high: 0x00AD, delta: 0 },
        R { low: 0x0401, high: 0x040C, delta: -864 },
        R { low: 0x040E, high: 0x044F, delta: -864 },
        R { low: 0x0451, high: 0x045C, delta: -864 },
        R { low: 0x045E, high: 0x045F, delta: -864 },
        R { low: 0x2116, high: 0x2116, delta: -8230 },
    ],
);

pub const ISO_8859_6: Codepage = Codepage::from_static(
    "ISO-8859-6",
    &[
        R { low: 0x0000, high: 0x00A0, delta: 0 },
        R { low: 0x00A4, high: 0x00A4, delta: 0 },
        R { low: 0x00AD, high: 0x00AD, delta: 0 },
        R { low: 0x060C, high: 0x060C, delta: -1376 },
        R { low: 0x061B, high: 0x061B, delta: -1376 },
        R { low: 0x061F, high: 0x061F, delta: -1376 },
        R { low: 0x0621, high: 0x063A, delta: -1376 },
        R { low: 0x0640, high: 0x0652, delta: -1376 },
    ],
);

pub const ISO_8859_15: Codepage = Codepage::from_static(
    "ISO-8859-15",
    &[
        R { low: 0x0000, high: 0x00A3, delta: 0 },
        R { low: 0x00A5, high: 0x00A5, delta: 0 },
        R { low: 0x00A7, high: 0x00A7, delta: 0 },
        R { low: 0x00A9, high: 0x00B3, delta: 0 },
        R { low: 0x00B5, high: 0x00B7, delta: 0 },
        R { low: 0x00B9, high: 0x00BB, delta: 0 },
        R { low: 0x00BF, high: 0x00FF, delta: 0 },
        R { low: 0x0152, high: 0x0153, delta: -150 },
        R { low: 0x0160, high: 0x0160, delta: -186 },
        R { low: 0x0161, high: 0x0161, delta: -185 },
        R { low: 0x0178, high: 0x0178, delta: -186 },
        R { low: 0x017D, high: 0x017D, delta: -201 },
        R { low: 0x017E, high: 0x017E, delta: -198 },
        R { low: 0x20AC, high: 0x20AC, delta: -8200 },
    ],
);

pub const CP1253: Codepage = Codepage::from_static(
    "CP1253",
    &[
        R { low: 0x0000, high: 0x007F, delta: 0 },
        R { low: 0x00A0, high: 0x00A0, delta: 0 },
        R { low: 0x00A3, high: 0x00A9, delta: 0 },
        R { low: 0x00AB, high: 0x00AE, delta: 0 },
        R { low: 0x00B0, high: 0x00B3, delta: 0 },
        R { low: 0x00B5, high: 0x00B7, delta: 0 },
        R { low: 0x00BB, high: 0x00BB, delta: 0 },
        R { low: 0x00BD, high: 0x00BD, delta: 0 },
        R { low: 0x0192, high: 0x0192, delta: -271 },
        R { low: 0x0384, high: 0x0384, delta: -720 },
        R { low: 0x0385, high: 0x0386, delta: -740 },
        R { low: 0x0388, high: 0x038A, delta: -720 },
        R { low: 0x038C, high: 0x038C, delta: -720 },
        R { low: 0x038E, high: 0x03A1, delta: -720 },
        R { low: 0x03A3, high: 0x03CE, delta: -720 },
        R { low: 0x2013, high: 0x2014, delta: -8061 },
        R { low: 0x2015, high: 0x2015, delta: -8038 },
        R { low: 0x2018, high: 0x2019, delta: -8071 },
        R { low: 0x201A, high: 0x201A, delta: -8088 },
        R { low: 0x201C, high: 0x201D, delta: -8073 },
        R { low: 0x201E, high: 0x201E, delta: -8090 },
        R { low: 0x2020, high: 0x2021, delta: -8090 },
        R { low: 0x2022, high: 0x2022, delta: -8077 },
        R { low: 0x2026, high: 0x2026, delta: -8097 },
        R { low: 0x2030, high: 0x2030, delta: -8103 },
        R { low: 0x2039, high: 0x2039, delta: -8110 },
        R { low: 0x203A, high: 0x203A, delta: -8095 },
        R { low: 0x20AC, high: 0x20AC, delta: -8236 },
        R { low: 0x2122, high: 0x2122, delta: -8329 },
    ],
);

pub const CP1254: Codepage = Codepage::from_static(
    "CP1254",
    &[
        R { low: 0x0000, high: 0x007F, delta: 0 },
        R { low: 0x00A0, high: 0x00CF, delta: 0 },
        R { low: 0x00D1, high: 0x00DC, delta: 0 },
        R { low: 0x00DF, high: 0x00EF, delta: 0 },
        R { low: 0x00F1, high: 0x00FC, delta: 0 },
        R { low: 0x00FF, high: 0x00FF, delta: 0 },
        R { low: 0x011E, high: 0x011E, delta: -78 },
        R { low: 0x011F, high: 0x011F, delta: -47 },
        R { low: 0x0130, high: 0x0130, delta: -83 },
        R { low: 0x0131, high: 0x0131, delta: -52 },
        R { low: 0x0152, high: 0x0152, delta: -198 },
        R { low: 0x0153, high: 0x0153, delta: -183 },
        R { low: 0x015E, high: 0x015E, delta: -128 },
        R { low: 0x015F, high: 0x015F, delta: -97 },
        R { low: 0x0160, high: 0x0160, delta: -214 },
        R { low: 0x0161, high: 0x0161, delta: -199 },
        R { low: 0x0178, high: 0x0178, delta: -217 },
        R { low: 0x0192, high: 0x0192, delta: -271 },
        R { low: 0x02C6, high: 0x02C6, delta: -574 },
        R { low: 0x02DC, high: 0x02DC, delta: -580 },
        R { low: 0x2013, high: 0x2014, delta: -8061 },
        R { low: 0x2018, high: 0x2019, delta: -8071 },
        R { low: 0x201A, high: 0x201A, delta: -8088 },
        R { low: 0x201C, high: 0x201D, delta: -8073 },
        R { low: 0x201E, high: 0x201E, delta: -8090 },
        R { low: 0x2020, high: 0x2021, delta: -8090 },
        R { low: 0x2022, high: 0x2022, delta: -8077 },
        R { low: 0x2026, high: 0x2026, delta: -8097 },
        R { low: 0x2030, high: 0x2030, delta: -8103 },
        R { low: 0x2039, high: 0x2039, delta: -8110 },
        R { low: 0x203A, high: 0x203A, delta: -8095 },
        R { low: 0x20AC, high: 0x20AC, delta: -8236 },
        R { low: 0x2122, high: 0x2122, delta: -8329 },
    ],
);
