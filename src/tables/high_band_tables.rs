use crate::decoder::codebooks::{EXC_CODEBOOK_LEN, EXC_LBR_CODEBOOK_LEN, LSP_CODEBOOK_LEN};

// first stage of the high band line spectral pair quantizer (64 x 8)
pub const HIGH_LSP_STAGE1: [i8; LSP_CODEBOOK_LEN] = [
    39, 12, -14, -20, -29, -61, -67, -76,
    -32, -71, -67, 68, 77, 46, 34, 5,
    -13, -48, -46, -72, -81, -84, -60, -58,
    -40, -28, 82, 93, 68, 45, 29, 3,
    -19, -47, -28, -43, -35, -30, -8, -13,
    -39, -91, -91, -123, -96, 10, 10, -6,
    -18, -55, -60, -91, -56, -36, -27, -16,
    -48, -75, 40, 28, -10, -28, 35, 9,
    37, 19, 1, -20, -31, -41, -18, -25,
    -35, -68, -80, 45, 27, -1, 47, 13,
    0, -29, -35, -57, -50, -79, -73, -38,
    -19, 5, 35, 14, -10, -23, 16, -8,
    5, -24, -40, -62, -23, -27, -22, -16,
    -18, -46, -72, -77, 43, 21, 33, 1,
    -80, -70, -70, -64, -56, -52, -39, -33,
    -31, -38, -19, -19, -15, 32, 33, -2,
    7, -15, -15, -24, -23, -33, -41, -56,
    -24, -57, 5, 89, 64, 41, 27, 5,
    -9, -47, -60, -97, -97, -124, -20, -9,
    -44, -73, 31, 29, -4, 64, 48, 7,
    -35, -57, 0, -3, -26, -47, -3, -6,
    -40, -76, -79, -48, 12, 81, 55, 10,
    9, -24, -43, -73, -57, -69, 16, 5,
    -28, -53, 18, 29, 20, 0, -4, -11,
    6, -13, 23, 7, -17, -35, -37, -37,
    -30, -68, -63, 6, 24, -9, -14, 3,
    21, -13, -27, -57, -49, -80, -24, -41,
    -5, -16, -5, 1, 45, 25, 12, -7,
    3, -15, -6, -16, -15, -8, 6, -13,
    -42, -81, -80, -87, 14, 1, -10, -3,
    -43, -69, -46, -24, -28, -29, 36, 6,
    -43, -56, -12, 12, 54, 79, 43, 9,
    54, 22, 2, 8, -12, -43, -46, -52,
    -38, -69, -89, -5, 75, 38, 33, 5,
    -13, -53, -62, -87, -89, -113, -99, -55,
    -34, -37, 62, 55, 33, 16, 21, -2,
    -17, -46, -29, -38, -38, -48, -39, -42,
    -36, -75, -72, -88, -48, -30, 21, 2,
    -15, -57, -64, -98, -84, -76, 25, 1,
    -46, -80, -12, 18, -7, 3, 34, 6,
    38, 31, 23, 4, -1, 20, 14, -15,
    -43, -78, -91, -24, 14, -3, 54, 16,
    0, -27, -28, -44, -56, -83, -92, -89,
    -3, 34, 56, 41, 36, 22, 20, -8,
    -7, -35, -42, -62, -49, 3, 12, -10,
    -50, -87, -96, -66, 92, 70, 38, 9,
    -70, -71, -62, -42, -39, -43, -11, -7,
    -50, -79, -58, -50, -31, 32, 31, -6,
    -4, -25, 7, -17, -38, -70, -58, -27,
    -43, -83, -28, 59, 36, 20, 31, 2,
    -27, -71, -80, -109, -98, -75, -33, -32,
    -31, -2, 33, 15, -6, 43, 33, -5,
    0, -22, -10, -27, -34, -49, -11, -20,
    -41, -91, -100, -121, -39, 57, 41, 10,
    -19, -50, -38, -59, -60, -70, -18, -20,
    -8, -31, -8, -15, 1, -14, -26, -25,
    33, 21, 32, 17, 1, -19, -19, -26,
    -58, -81, -35, -22, 45, 30, 11, -11,
    3, -26, -48, -87, -67, -83, -58, 3,
    -1, -26, -20, 44, 10, 25, 39, 5,
    -9, -35, -27, -38, 7, 10, 4, -9,
    -42, -85, -102, -127, 52, 44, 28, 10,
    -47, -61, -40, -39, -17, -1, -10, -33,
    -42, -74, -48, 21, -4, 70, 52, 10,
];

// second stage refinement (64 x 8)
pub const HIGH_LSP_STAGE2: [i8; LSP_CODEBOOK_LEN] = [
    -36, -62, 6, -9, -10, -14, -56, 23,
    1, -26, 23, -48, -17, 12, 8, -7,
    23, 29, -36, -28, -6, -29, -17, -5,
    40, 23, 10, 10, -46, -13, 36, 6,
    4, -30, -29, 62, 32, -32, -1, 22,
    -14, 1, -4, -22, -45, 2, 54, 4,
    -30, -57, -59, -12, 27, -3, -31, 8,
    -9, 5, 10, -14, 32, 66, 19, 9,
    2, -25, -37, 23, -15, 18, -38, -31,
    5, -9, -21, 15, 0, 22, 62, 30,
    15, -12, -14, -46, 77, 21, 33, 3,
    34, 29, -19, 50, 2, 11, 9, -38,
    -12, -37, 62, 1, -15, 54, 32, 6,
    2, -24, 20, 35, -21, 2, 19, 24,
    -13, 55, 4, 9, 39, -19, 30, -1,
    -21, 73, 54, 33, 8, 18, 3, 15,
    6, -19, -47, 6, -3, -48, -50, 1,
    26, 20, 8, -23, -50, 65, -14, -55,
    -17, -31, -37, -28, 53, -1, -17, -53,
    1, 57, 11, -8, -25, -30, -37, 64,
    5, -52, -45, 15, 23, 31, 15, 14,
    -25, 24, 33, -2, -44, -56, -18, 6,
    -21, -43, 4, -12, 17, -37, 20, -10,
    34, 15, 2, 15, 55, 21, -11, -31,
    -6, 46, 25, 16, -9, -25, -8, -62,
    28, 17, 20, -32, -29, 26, 30, 25,
    -19, 2, -16, -17, 26, -51, 2, 50,
    42, 19, -66, 23, 29, -2, 3, 19,
    -19, -37, 32, 15, 6, 30, -34, 13,
    11, -5, 40, 31, 10, -42, 4, -9,
    26, -9, -70, 17, -2, -23, 20, -22,
    -55, 51, -24, -31, 22, -22, 15, -13,
    3, -10, -28, -16, 56, 4, -63, 11,
    -18, -15, -18, -38, -35, 16, -7, 34,
    -1, -21, -49, -47, 9, -37, 7, 8,
    69, 55, 20, 6, -33, -45, -10, -9,
    6, -9, 12, 71, 15, -3, -42, -7,
    -24, 32, -35, -2, -42, -17, -5, 0,
    -2, -33, -54, 13, -12, -34, 47, 23,
    19, 55, 7, -8, 74, 31, 14, 16,
    -23, -26, 19, 12, -18, -49, -28, -31,
    -20, 2, -14, -20, -47, 78, 40, 13,
    -23, -11, 21, -6, 18, 1, 47, 5,
    38, 35, 32, 46, 22, 8, 13, 16,
    -14, 18, 51, 19, 40, 39, 11, -26,
    -1, -17, 47, 2, -53, -15, 31, -22,
    38, 21, -15, -16, 5, -33, 53, 15,
    -38, 86, 11, -3, -24, 49, 13, -4,
    -11, -18, 28, 20, -12, -27, -26, 35,
    -25, -35, -3, -20, -61, 30, 10, -55,
    -12, -22, -52, -54, -14, 19, -32, -12,
    45, 15, -8, -48, -9, 11, -32, 8,
    -16, -34, -13, 51, 18, 38, -2, -32,
    -17, 22, -2, -18, -28, -70, 59, 27,
    -28, -19, -10, -20, -9, -9, -8, -21,
    21, -8, 35, -2, 45, -3, -9, 12,
    0, 30, 7, -39, 43, 27, -38, -91,
    30, 26, 19, -55, -4, 63, 14, -17,
    13, 9, 13, 2, 7, 4, 6, 61,
    72, -1, -17, 29, -1, -22, -17, 8,
    -28, -37, 63, 44, 41, 3, 2, 14,
    9, -6, 75, -8, -7, -12, -15, -12,
    13, 9, -4, 30, -22, -65, 15, 0,
    -45, 4, -4, 1, 5, 22, 11, 23,
];

// innovation shapes, 128 x 8
pub const HIGH_EXCITATION: [i8; EXC_CODEBOOK_LEN] = [
    -24, 21, -20, 5, -5, -7, 14, -10,
    2, -27, 16, -20, 0, -32, 26, 19,
    8, -11, -41, 31, 28, -27, -32, 34,
    42, 34, -17, 22, -10, 13, -29, 18,
    -12, -26, -24, 11, 22, 5, -5, -5,
    54, -68, -43, 57, -25, 24, 4, 4,
    26, -8, -12, -17, 54, 30, -45, 1,
    10, -15, 18, -41, 11, 68, -67, 37,
    -16, -24, -16, 38, -22, 6, -29, 30,
    66, -27, 5, 7, -16, 13, 2, -12,
    -7, -3, -20, 36, 4, -28, 9, 3,
    32, 48, 26, 39, 3, 0, 7, -21,
    -13, 5, -82, -7, 73, -20, 34, -9,
    -5, 1, -1, 10, -5, -10, -1, 9,
    1, -9, 10, 0, -14, 11, -1, -2,
    -1, 11, 20, 96, -81, -22, -12, -9,
    -58, 9, 24, -30, 26, -35, 27, -12,
    13, -18, 56, -59, 15, -7, 23, -15,
    -1, 6, -25, 14, -22, -20, 47, -11,
    16, 2, 38, -23, -19, -30, -9, 40,
    -11, 5, 4, -6, 8, 26, -21, -11,
    127, 4, 1, 6, -9, 2, -7, -2,
    -3, 7, -5, 10, -19, 7, -106, 91,
    -3, 9, -4, 21, -8, 26, -80, 8,
    1, -2, -10, -17, -17, -27, 32, 71,
    6, -29, 11, -23, 54, -38, 29, -22,
    39, 87, -31, -12, -20, 3, -2, -2,
    2, 20, 0, -1, -35, 27, 9, -6,
    -12, 3, -12, -6, 13, 1, 14, -22,
    -59, -15, -17, -25, 13, -7, 7, 3,
    0, 1, -7, 6, -3, 61, -37, -23,
    -23, -29, 38, -31, 27, 1, -8, 2,
    -27, 23, -26, 36, -34, 5, 24, -24,
    -6, 7, 3, -59, 78, -62, 44, -16,
    1, 6, 0, 17, 8, 45, 0, -110,
    6, 14, -2, 32, -77, -56, 62, -3,
    3, -13, 4, -16, 102, -15, -36, -1,
    9, -113, 6, 23, 0, 9, 9, 5,
    -8, -1, -14, 5, -12, 121, -53, -27,
    -8, -9, 22, -13, 3, 2, -3, 1,
    -2, -71, 95, 38, -19, 15, -16, -5,
    71, 10, 2, -32, -13, -5, 15, -1,
    -2, -14, -85, 30, 29, 6, 3, 2,
    0, 0, 0, 0, 0, 0, 0, 0,
    2, -65, -56, -9, 18, 18, 23, -14,
    -2, 0, 12, -29, 26, -12, 1, 2,
    -12, -64, 90, -6, 4, 1, 5, -5,
    -110, -3, -31, 22, -29, 9, 0, 8,
    -40, -5, 21, -5, -5, 13, 10, -18,
    40, 1, 35, -20, 30, -28, 11, -6,
    19, 7, 14, 18, -64, 9, -6, 16,
    51, 68, 8, 16, 12, -8, 0, -9,
    20, -22, 25, 7, -4, -13, 41, -35,
    93, -18, -54, 11, -1, 1, -9, 4,
    -66, 66, -31, 20, -22, 25, -23, 11,
    10, 9, 19, 15, 11, -5, -31, -10,
    -23, -28, -6, -6, -3, -4, 5, 3,
    -28, 22, -11, -42, 25, -25, -16, 41,
    34, 47, -6, 2, 42, -19, -22, 5,
    -39, 32, 6, -35, 22, 17, -30, 8,
    -26, -11, -11, 3, -12, 33, 33, -37,
    21, -1, 6, -4, 3, 0, -5, 5,
    12, -12, 57, 27, -61, -3, 20, -17,
    2, 0, 4, 0, -2, -33, -58, 81,
    -23, 39, -10, -5, 2, 6, -7, 5,
    4, -3, -2, -13, -23, -72, 107, 15,
    -5, 0, -7, -3, -6, 5, -4, 15,
    47, 12, -31, 25, -16, 8, 22, -25,
    -62, -56, -18, 14, 28, 12, 2, -11,
    74, -66, 41, -20, -7, 16, -20, 16,
    -8, 0, -16, 4, -19, 92, 12, -59,
    -14, -39, 49, -25, -16, 23, -27, 19,
    -3, -33, 19, 85, -29, 6, -7, -10,
    16, -7, -12, 1, -6, 2, 4, -2,
    64, 10, -25, 41, -2, -31, 15, 0,
    110, 50, 69, 35, 28, 19, -10, 2,
    -43, -49, -56, -15, -16, 10, 3, 12,
    -1, -8, 1, 26, -12, -1, 7, -11,
    -27, 41, 25, 1, -11, -18, 22, -7,
    -1, -47, -8, 23, -3, -17, -7, 18,
    -125, 59, -5, 3, 18, 1, 2, 3,
    27, -35, 65, -53, 50, -46, 37, -21,
    -28, 7, 14, -37, -5, -5, 12, 5,
    -8, 78, -19, 21, -6, -16, 8, -7,
    5, 2, 7, 2, 10, -6, 12, -60,
    44, 11, -36, -32, 31, 0, 2, -2,
    2, 1, -3, 7, -10, 17, -21, 10,
    6, -2, 19, -2, 59, -38, -86, 38,
    8, -41, -30, -45, -33, 7, 15, 28,
    29, -7, 24, -40, 7, 7, 5, -2,
    9, 24, -23, -18, 6, -29, 30, 2,
    28, 49, -11, -46, 10, 43, -13, -9,
    -1, -3, -7, -7, -17, -6, 97, -33,
    -21, 3, 5, 1, 12, -43, -8, 28,
    7, -43, -7, 17, -20, 19, -1, 2,
    -13, 9, 54, 34, 9, -28, -11, -9,
    -17, 110, -59, 44, -26, 0, 3, -12,
    -47, 73, -34, -43, 38, -33, 16, -5,
    -46, -4, -6, -2, -25, 19, -29, 28,
    -13, 5, 14, 27, -40, -43, 4, 32,
    -13, -2, -35, -4, 112, -42, 9, -12,
    37, -28, 17, 14, -19, 35, -39, 23,
    3, -14, -1, -57, -5, 94, -9, 3,
    -39, 5, 30, -10, -32, 42, -13, -14,
    -97, -63, 30, -9, 1, -7, 12, 5,
    20, 17, -9, -36, -30, 25, 47, -9,
    -15, 12, -22, 98, -8, -50, 15, -27,
    21, -16, -11, 2, 12, -10, 10, -3,
    33, 36, -96, 0, -17, 31, -9, 9,
    3, -20, 13, -11, 8, -4, 10, -10,
    9, 1, 112, -70, -27, 5, -21, 2,
    -57, -3, -29, 10, 19, -21, 21, -10,
    -66, -3, 91, -35, 30, -12, 0, -7,
    59, -28, 26, 2, 14, -18, 1, 1,
    11, 17, 20, -54, -59, 27, 4, 29,
    32, 5, 19, 12, -4, 1, 7, -10,
    5, -2, 10, 0, 23, -5, 28, -104,
    46, 11, 16, 3, 29, 1, -8, -14,
    1, 7, -50, 88, -62, 26, 8, -17,
    -14, 50, 0, 32, -12, -3, -27, 18,
    -8, -5, 8, 3, -20, -11, 37, -12,
    9, 33, 46, -101, -1, -4, 1, 6,
    -1, 28, -42, -15, 16, 5, -1, -2,
    -55, 85, 38, -9, -4, 11, -2, -9,
    -6, 3, -20, -10, -77, 89, 24, -3,
    -104, -57, -26, -31, -20, -6, -9, 14,
    20, -23, 46, -15, -31, 28, 1, -15,
    -2, 6, -2, 31, 45, -76, 23, -25,
];

// low bitrate innovation shapes, 32 x 10
pub const HIGH_EXCITATION_LBR: [i8; EXC_LBR_CODEBOOK_LEN] = [
    -3, -2, -1, 0, -4, 5, 35, -40, -9, 13,
    -44, 5, -27, -1, -7, 6, -11, 7, -8, 7,
    19, -14, 15, -4, 9, -10, 10, -8, 10, -9,
    -1, 1, 0, 0, 2, 5, -18, 22, -53, 50,
    1, -23, 50, -36, 15, 3, -13, 14, -10, 6,
    1, 5, -3, 4, -2, 5, -32, 25, 5, -2,
    -1, -4, 1, 11, -29, 26, -6, -15, 30, -18,
    0, 15, -17, 40, -41, 3, 9, -2, -2, 3,
    -3, -1, -5, 2, 21, -6, -16, -21, 23, 2,
    60, 15, 16, -16, -9, 14, 9, -1, 7, -9,
    0, 1, 1, 0, -1, -6, 17, -28, 54, -45,
    -1, 1, -1, -6, -6, 2, 11, 26, -29, -2,
    46, -21, 34, 12, -23, 32, -23, 16, -10, 3,
    66, 19, -20, 24, 7, 11, -3, 0, -3, -1,
    -50, -46, 2, -18, -3, 4, -1, -2, 3, -3,
    -19, 41, -36, 9, 11, -24, 21, -16, 9, -3,
    -25, -3, 10, 18, -9, -2, -5, -1, -5, 6,
    -4, -3, 2, -26, 21, -19, 35, -15, 7, -13,
    17, -19, 39, -43, 48, -31, 16, -9, 7, -2,
    -5, 3, -4, 9, -19, 27, -55, 63, -35, 10,
    26, -44, -2, 9, 4, 1, -6, 8, -9, 5,
    -8, -1, -3, -16, 45, -42, 5, 15, -16, 10,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    -16, 24, -55, 47, -38, 27, -19, 7, -3, 1,
    16, 27, 20, -19, 18, 5, -7, 1, -5, 2,
    -6, 8, -22, 0, -3, -3, 8, -1, 7, -8,
    1, -3, 5, 0, 17, -48, 58, -52, 29, -7,
    -2, 3, -10, 6, -26, 58, -31, 1, -6, 3,
    93, -29, 39, 3, 17, 5, 6, -1, -1, -1,
    27, 13, 10, 19, -7, -34, 12, 10, -4, 9,
    -76, 9, 8, -28, -2, -11, 2, -1, 3, 1,
    -83, 38, -39, 4, -16, -6, -2, -5, 5, -2,
];

#[cfg(test)]
mod tests {
    extern crate std;
    use super::*;

    #[test]
    fn row_boundaries() {
        assert_eq!(&HIGH_LSP_STAGE1[..8], &[39, 12, -14, -20, -29, -61, -67, -76]);
        assert_eq!(&HIGH_LSP_STAGE2[504..], &[-45, 4, -4, 1, 5, 22, 11, 23]);
        assert_eq!(&HIGH_EXCITATION[1016..], &[-2, 6, -2, 31, 45, -76, 23, -25]);
        assert_eq!(&HIGH_EXCITATION_LBR[..10], &[-3, -2, -1, 0, -4, 5, 35, -40, -9, 13]);
    }

    #[test]
    fn silent_shapes() {
        // one all zero shape in each excitation table
        assert!(HIGH_EXCITATION.chunks(8).filter(|shape| shape.iter().all(|x| *x == 0)).count() == 1);
        assert!(HIGH_EXCITATION_LBR.chunks(10).filter(|shape| shape.iter().all(|x| *x == 0)).count() == 1);
    }
}
