// Generated by `cargo run -p tools --bin gen_decode_tree` from the WHATWG
// named character reference list (entities.json). Do not edit by hand.

/// Format revision of [`HTML_DECODE_TREE`].
pub const DECODE_TREE_VERSION: u32 = 1;

/// Packed trie over every HTML named character reference.
pub static HTML_DECODE_TREE: [u16; 15242] = [
    0x1d41, 0x003c, 0x00d5, 0x0131, 0x028a, 0x049d, 0x057b, 0x05d0, 0x0675, 0x06de, 0x07a2, 0x07d6,
    0x080f, 0x0a4a, 0x0a91, 0x0da1, 0x0e6d, 0x0f09, 0x0f26, 0x10ca, 0x1228, 0x12e1, 0x1415, 0x149d,
    0x14c3, 0x14df, 0x1525, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x156b, 0x16cd, 0x198d,
    0x1c12, 0x1ddd, 0x1f7e, 0x2060, 0x21b0, 0x228d, 0x23c0, 0x23fb, 0x2442, 0x2824, 0x2912, 0x2d08,
    0x2e48, 0x2fce, 0x3016, 0x32ba, 0x3639, 0x37ac, 0x38fe, 0x3a28, 0x3a71, 0x3ae0, 0x3b2e, 0x0800,
    0x0045, 0x004d, 0x0061, 0x0062, 0x0063, 0x0066, 0x0067, 0x006c, 0x006d, 0x006e, 0x006f, 0x0070,
    0x0072, 0x0073, 0x0074, 0x0075, 0x005c, 0x0062, 0x0066, 0x006d, 0x0073, 0x007f, 0x0084, 0x008b,
    0x0090, 0x0095, 0x0098, 0x00a6, 0x00b3, 0x00b9, 0x00c8, 0x00cf, 0x006c, 0x0069, 0x0067, 0x803b,
    0x00c6, 0x40c6, 0x0050, 0x803b, 0x0026, 0x4026, 0x0063, 0x0075, 0x0074, 0x0065, 0x803b, 0x00c1,
    0x40c1, 0x0072, 0x0065, 0x0076, 0x0065, 0x003b, 0x4102, 0x0100, 0x0069, 0x0079, 0x0078, 0x007d,
    0x0072, 0x0063, 0x803b, 0x00c2, 0x40c2, 0x003b, 0x4410, 0x0072, 0x003b, 0xc000, 0xd835, 0xdd04,
    0x0072, 0x0061, 0x0076, 0x0065, 0x803b, 0x00c0, 0x40c0, 0x0070, 0x0068, 0x0061, 0x003b, 0x4391,
    0x0061, 0x0063, 0x0072, 0x003b, 0x4100, 0x0064, 0x003b, 0x6a53, 0x0100, 0x0067, 0x0070, 0x009d,
    0x00a1, 0x006f, 0x006e, 0x003b, 0x4104, 0x0066, 0x003b, 0xc000, 0xd835, 0xdd38, 0x0070, 0x006c,
    0x0079, 0x0046, 0x0075, 0x006e, 0x0063, 0x0074, 0x0069, 0x006f, 0x006e, 0x003b, 0x6061, 0x0069,
    0x006e, 0x0067, 0x803b, 0x00c5, 0x40c5, 0x0100, 0x0063, 0x0073, 0x00be, 0x00c3, 0x0072, 0x003b,
    0xc000, 0xd835, 0xdc9c, 0x0069, 0x0067, 0x006e, 0x003b, 0x6254, 0x0069, 0x006c, 0x0064, 0x0065,
    0x803b, 0x00c3, 0x40c3, 0x006d, 0x006c, 0x803b, 0x00c4, 0x40c4, 0x0400, 0x0061, 0x0063, 0x0065,
    0x0066, 0x006f, 0x0072, 0x0073, 0x0075, 0x00e5, 0x00fb, 0x00fe, 0x0117, 0x011c, 0x0122, 0x0127,
    0x012a, 0x0100, 0x0063, 0x0072, 0x00ea, 0x00f2, 0x006b, 0x0073, 0x006c, 0x0061, 0x0073, 0x0068,
    0x003b, 0x6216, 0x0176, 0x00f6, 0x00f8, 0x003b, 0x6ae7, 0x0065, 0x0064, 0x003b, 0x6306, 0x0079,
    0x003b, 0x4411, 0x0180, 0x0063, 0x0072, 0x0074, 0x0105, 0x010b, 0x0114, 0x0061, 0x0075, 0x0073,
    0x0065, 0x003b, 0x6235, 0x006e, 0x006f, 0x0075, 0x006c, 0x006c, 0x0069, 0x0073, 0x003b, 0x612c,
    0x0061, 0x003b, 0x4392, 0x0072, 0x003b, 0xc000, 0xd835, 0xdd05, 0x0070, 0x0066, 0x003b, 0xc000,
    0xd835, 0xdd39, 0x0065, 0x0076, 0x0065, 0x003b, 0x42d8, 0x0063, 0x00f2, 0x0113, 0x006d, 0x0070,
    0x0065, 0x0071, 0x003b, 0x624e, 0x0700, 0x0048, 0x004f, 0x0061, 0x0063, 0x0064, 0x0065, 0x0066,
    0x0068, 0x0069, 0x006c, 0x006f, 0x0072, 0x0073, 0x0075, 0x014d, 0x0151, 0x0156, 0x0180, 0x019e,
    0x01a2, 0x01b5, 0x01b7, 0x01ba, 0x01dc, 0x0215, 0x0273, 0x0278, 0x027e, 0x0063, 0x0079, 0x003b,
    0x4427, 0x0050, 0x0059, 0x803b, 0x00a9, 0x40a9, 0x0180, 0x0063, 0x0070, 0x0079, 0x015d, 0x0162,
    0x017a, 0x0075, 0x0074, 0x0065, 0x003b, 0x4106, 0x0100, 0x003b, 0x0069, 0x0167, 0x0168, 0x62d2,
    0x0074, 0x0061, 0x006c, 0x0044, 0x0069, 0x0066, 0x0066, 0x0065, 0x0072, 0x0065, 0x006e, 0x0074,
    0x0069, 0x0061, 0x006c, 0x0044, 0x003b, 0x6145, 0x006c, 0x0065, 0x0079, 0x0073, 0x003b, 0x612d,
    0x0200, 0x0061, 0x0065, 0x0069, 0x006f, 0x0189, 0x018e, 0x0194, 0x0198, 0x0072, 0x006f, 0x006e,
    0x003b, 0x410c, 0x0064, 0x0069, 0x006c, 0x803b, 0x00c7, 0x40c7, 0x0072, 0x0063, 0x003b, 0x4108,
    0x006e, 0x0069, 0x006e, 0x0074, 0x003b, 0x6230, 0x006f, 0x0074, 0x003b, 0x410a, 0x0100, 0x0064,
    0x006e, 0x01a7, 0x01ad, 0x0069, 0x006c, 0x006c, 0x0061, 0x003b, 0x40b8, 0x0074, 0x0065, 0x0072,
    0x0044, 0x006f, 0x0074, 0x003b, 0x40b7, 0x00f2, 0x017f, 0x0069, 0x003b, 0x43a7, 0x0072, 0x0063,
    0x006c, 0x0065, 0x0200, 0x0044, 0x004d, 0x0050, 0x0054, 0x01c7, 0x01cb, 0x01d1, 0x01d6, 0x006f,
    0x0074, 0x003b, 0x6299, 0x0069, 0x006e, 0x0075, 0x0073, 0x003b, 0x6296, 0x006c, 0x0075, 0x0073,
    0x003b, 0x6295, 0x0069, 0x006d, 0x0065, 0x0073, 0x003b, 0x6297, 0x006f, 0x0100, 0x0063, 0x0073,
    0x01e2, 0x01f8, 0x006b, 0x0077, 0x0069, 0x0073, 0x0065, 0x0043, 0x006f, 0x006e, 0x0074, 0x006f,
    0x0075, 0x0072, 0x0049, 0x006e, 0x0074, 0x0065, 0x0067, 0x0072, 0x0061, 0x006c, 0x003b, 0x6232,
    0x0065, 0x0043, 0x0075, 0x0072, 0x006c, 0x0079, 0x0100, 0x0044, 0x0051, 0x0203, 0x020f, 0x006f,
    0x0075, 0x0062, 0x006c, 0x0065, 0x0051, 0x0075, 0x006f, 0x0074, 0x0065, 0x003b, 0x601d, 0x0075,
    0x006f, 0x0074, 0x0065, 0x003b, 0x6019, 0x0200, 0x006c, 0x006e, 0x0070, 0x0075, 0x021e, 0x0228,
    0x0247, 0x0255, 0x006f, 0x006e, 0x0100, 0x003b, 0x0065, 0x0225, 0x0226, 0x6237, 0x003b, 0x6a74,
    0x0180, 0x0067, 0x0069, 0x0074, 0x022f, 0x0236, 0x023a, 0x0072, 0x0075, 0x0065, 0x006e, 0x0074,
    0x003b, 0x6261, 0x006e, 0x0074, 0x003b, 0x622f, 0x006f, 0x0075, 0x0072, 0x0049, 0x006e, 0x0074,
    0x0065, 0x0067, 0x0072, 0x0061, 0x006c, 0x003b, 0x622e, 0x0100, 0x0066, 0x0072, 0x024c, 0x024e,
    0x003b, 0x6102, 0x006f, 0x0064, 0x0075, 0x0063, 0x0074, 0x003b, 0x6210, 0x006e, 0x0074, 0x0065,
    0x0072, 0x0043, 0x006c, 0x006f, 0x0063, 0x006b, 0x0077, 0x0069, 0x0073, 0x0065, 0x0043, 0x006f,
    0x006e, 0x0074, 0x006f, 0x0075, 0x0072, 0x0049, 0x006e, 0x0074, 0x0065, 0x0067, 0x0072, 0x0061,
    0x006c, 0x003b, 0x6233, 0x006f, 0x0073, 0x0073, 0x003b, 0x6a2f, 0x0063, 0x0072, 0x003b, 0xc000,
    0xd835, 0xdc9e, 0x0070, 0x0100, 0x003b, 0x0043, 0x0284, 0x0285, 0x62d3, 0x0061, 0x0070, 0x003b,
    0x624d, 0x0580, 0x0044, 0x004a, 0x0053, 0x005a, 0x0061, 0x0063, 0x0065, 0x0066, 0x0069, 0x006f,
    0x0073, 0x02a0, 0x02ac, 0x02b0, 0x02b4, 0x02b8, 0x02cb, 0x02d7, 0x02e1, 0x02e6, 0x0333, 0x048d,
    0x0100, 0x003b, 0x006f, 0x0179, 0x02a5, 0x0074, 0x0072, 0x0061, 0x0068, 0x0064, 0x003b, 0x6911,
    0x0063, 0x0079, 0x003b, 0x4402, 0x0063, 0x0079, 0x003b, 0x4405, 0x0063, 0x0079, 0x003b, 0x440f,
    0x0180, 0x0067, 0x0072, 0x0073, 0x02bf, 0x02c4, 0x02c7, 0x0067, 0x0065, 0x0072, 0x003b, 0x6021,
    0x0072, 0x003b, 0x61a1, 0x0068, 0x0076, 0x003b, 0x6ae4, 0x0100, 0x0061, 0x0079, 0x02d0, 0x02d5,
    0x0072, 0x006f, 0x006e, 0x003b, 0x410e, 0x003b, 0x4414, 0x006c, 0x0100, 0x003b, 0x0074, 0x02dd,
    0x02de, 0x6207, 0x0061, 0x003b, 0x4394, 0x0072, 0x003b, 0xc000, 0xd835, 0xdd07, 0x0100, 0x0061,
    0x0066, 0x02eb, 0x0327, 0x0100, 0x0063, 0x006d, 0x02f0, 0x0322, 0x0072, 0x0069, 0x0074, 0x0069,
    0x0063, 0x0061, 0x006c, 0x0200, 0x0041, 0x0044, 0x0047, 0x0054, 0x0300, 0x0306, 0x0316, 0x031c,
    0x0063, 0x0075, 0x0074, 0x0065, 0x003b, 0x40b4, 0x006f, 0x0174, 0x030b, 0x030d, 0x003b, 0x42d9,
    0x0062, 0x006c, 0x0065, 0x0041, 0x0063, 0x0075, 0x0074, 0x0065, 0x003b, 0x42dd, 0x0072, 0x0061,
    0x0076, 0x0065, 0x003b, 0x4060, 0x0069, 0x006c, 0x0064, 0x0065, 0x003b, 0x42dc, 0x006f, 0x006e,
    0x0064, 0x003b, 0x62c4, 0x0066, 0x0065, 0x0072, 0x0065, 0x006e, 0x0074, 0x0069, 0x0061, 0x006c,
    0x0044, 0x003b, 0x6146, 0x0470, 0x033d, 0x0000, 0x0000, 0x0000, 0x0342, 0x0354, 0x0000, 0x0405,
    0x0066, 0x003b, 0xc000, 0xd835, 0xdd3b, 0x0180, 0x003b, 0x0044, 0x0045, 0x0348, 0x0349, 0x034d,
    0x40a8, 0x006f, 0x0074, 0x003b, 0x60dc, 0x0071, 0x0075, 0x0061, 0x006c, 0x003b, 0x6250, 0x0062,
    0x006c, 0x0065, 0x0300, 0x0043, 0x0044, 0x004c, 0x0052, 0x0055, 0x0056, 0x0363, 0x0372, 0x0382,
    0x03cf, 0x03e2, 0x03f8, 0x006f, 0x006e, 0x0074, 0x006f, 0x0075, 0x0072, 0x0049, 0x006e, 0x0074,
    0x0065, 0x0067, 0x0072, 0x0061, 0x00ec, 0x0239, 0x006f, 0x0274, 0x0379, 0x0000, 0x0000, 0x037b,
    0x00bb, 0x0349, 0x006e, 0x0041, 0x0072, 0x0072, 0x006f, 0x0077, 0x003b, 0x61d3, 0x0100, 0x0065,
    0x006f, 0x0387, 0x03a4, 0x0066, 0x0074, 0x0180, 0x0041, 0x0052, 0x0054, 0x0390, 0x0396, 0x03a1,
    0x0072, 0x0072, 0x006f, 0x0077, 0x003b, 0x61d0, 0x0069, 0x0067, 0x0068, 0x0074, 0x0041, 0x0072,
    0x0072, 0x006f, 0x0077, 0x003b, 0x61d4, 0x0065, 0x00e5, 0x02ca, 0x006e, 0x0067, 0x0100, 0x004c,
    0x0052, 0x03ab, 0x03c4, 0x0065, 0x0066, 0x0074, 0x0100, 0x0041, 0x0052, 0x03b3, 0x03b9, 0x0072,
    0x0072, 0x006f, 0x0077, 0x003b, 0x67f8, 0x0069, 0x0067, 0x0068, 0x0074, 0x0041, 0x0072, 0x0072,
    0x006f, 0x0077, 0x003b, 0x67fa, 0x0069, 0x0067, 0x0068, 0x0074, 0x0041, 0x0072, 0x0072, 0x006f,
    0x0077, 0x003b, 0x67f9, 0x0069, 0x0067, 0x0068, 0x0074, 0x0100, 0x0041, 0x0054, 0x03d8, 0x03de,
    0x0072, 0x0072, 0x006f, 0x0077, 0x003b, 0x61d2, 0x0065, 0x0065, 0x003b, 0x62a8, 0x0070, 0x0241,
    0x03e9, 0x0000, 0x0000, 0x03ef, 0x0072, 0x0072, 0x006f, 0x0077, 0x003b, 0x61d1, 0x006f, 0x0077,
    0x006e, 0x0041, 0x0072, 0x0072, 0x006f, 0x0077, 0x003b, 0x61d5, 0x0065, 0x0072, 0x0074, 0x0069,
    0x0063, 0x0061, 0x006c, 0x0042, 0x0061, 0x0072, 0x003b, 0x6225, 0x006e, 0x0300, 0x0041, 0x0042,
    0x004c, 0x0052, 0x0054, 0x0061, 0x0412, 0x042a, 0x0430, 0x045e, 0x047f, 0x037c, 0x0072, 0x0072,
    0x006f, 0x0077, 0x0180, 0x003b, 0x0042, 0x0055, 0x041d, 0x041e, 0x0422, 0x6193, 0x0061, 0x0072,
    0x003b, 0x6913, 0x0070, 0x0041, 0x0072, 0x0072, 0x006f, 0x0077, 0x003b, 0x61f5, 0x0072, 0x0065,
    0x0076, 0x0065, 0x003b, 0x4311, 0x0065, 0x0066, 0x0074, 0x02d2, 0x043a, 0x0000, 0x0446, 0x0000,
    0x0450, 0x0069, 0x0067, 0x0068, 0x0074, 0x0056, 0x0065, 0x0063, 0x0074, 0x006f, 0x0072, 0x003b,
    0x6950, 0x0065, 0x0065, 0x0056, 0x0065, 0x0063, 0x0074, 0x006f, 0x0072, 0x003b, 0x695e, 0x0065,
    0x0063, 0x0074, 0x006f, 0x0072, 0x0100, 0x003b, 0x0042, 0x0459, 0x045a, 0x61bd, 0x0061, 0x0072,
    0x003b, 0x6956, 0x0069, 0x0067, 0x0068, 0x0074, 0x01d4, 0x0467, 0x0000, 0x0471, 0x0065, 0x0065,
    0x0056, 0x0065, 0x0063, 0x0074, 0x006f, 0x0072, 0x003b, 0x695f, 0x0065, 0x0063, 0x0074, 0x006f,
    0x0072, 0x0100, 0x003b, 0x0042, 0x047a, 0x047b, 0x61c1, 0x0061, 0x0072, 0x003b, 0x6957, 0x0065,
    0x0065, 0x0100, 0x003b, 0x0041, 0x0486, 0x0487, 0x62a4, 0x0072, 0x0072, 0x006f, 0x0077, 0x003b,
    0x61a7, 0x0100, 0x0063, 0x0074, 0x0492, 0x0497, 0x0072, 0x003b, 0xc000, 0xd835, 0xdc9f, 0x0072,
    0x006f, 0x006b, 0x003b, 0x4110, 0x0800, 0x004e, 0x0054, 0x0061, 0x0063, 0x0064, 0x0066, 0x0067,
    0x006c, 0x006d, 0x006f, 0x0070, 0x0071, 0x0073, 0x0074, 0x0075, 0x0078, 0x04bd, 0x04c0, 0x04c4,
    0x04cb, 0x04de, 0x04e2, 0x04e7, 0x04ee, 0x04f5, 0x0521, 0x052f, 0x0536, 0x0552, 0x055d, 0x0560,
    0x0565, 0x0047, 0x003b, 0x414a, 0x0048, 0x803b, 0x00d0, 0x40d0, 0x0063, 0x0075, 0x0074, 0x0065,
    0x803b, 0x00c9, 0x40c9, 0x0180, 0x0061, 0x0069, 0x0079, 0x04d2, 0x04d7, 0x04dc, 0x0072, 0x006f,
    0x006e, 0x003b, 0x411a, 0x0072, 0x0063, 0x803b, 0x00ca, 0x40ca, 0x003b, 0x442d, 0x006f, 0x0074,
    0x003b, 0x4116, 0x0072, 0x003b, 0xc000, 0xd835, 0xdd08, 0x0072, 0x0061, 0x0076, 0x0065, 0x803b,
    0x00c8, 0x40c8, 0x0065, 0x006d, 0x0065, 0x006e, 0x0074, 0x003b, 0x6208, 0x0100, 0x0061, 0x0070,
    0x04fa, 0x04fe, 0x0063, 0x0072, 0x003b, 0x4112, 0x0074, 0x0079, 0x0253, 0x0506, 0x0000, 0x0000,
    0x0512, 0x006d, 0x0061, 0x006c, 0x006c, 0x0053, 0x0071, 0x0075, 0x0061, 0x0072, 0x0065, 0x003b,
    0x65fb, 0x0065, 0x0072, 0x0079, 0x0053, 0x006d, 0x0061, 0x006c, 0x006c, 0x0053, 0x0071, 0x0075,
    0x0061, 0x0072, 0x0065, 0x003b, 0x65ab, 0x0100, 0x0067, 0x0070, 0x0526, 0x052a, 0x006f, 0x006e,
    0x003b, 0x4118, 0x0066, 0x003b, 0xc000, 0xd835, 0xdd3c, 0x0073, 0x0069, 0x006c, 0x006f, 0x006e,
    0x003b, 0x4395, 0x0075, 0x0100, 0x0061, 0x0069, 0x053c, 0x0549, 0x006c, 0x0100, 0x003b, 0x0054,
    0x0542, 0x0543, 0x6a75, 0x0069, 0x006c, 0x0064, 0x0065, 0x003b, 0x6242, 0x006c, 0x0069, 0x0062,
    0x0072, 0x0069, 0x0075, 0x006d, 0x003b, 0x61cc, 0x0100, 0x0063, 0x0069, 0x0557, 0x055a, 0x0072,
    0x003b, 0x6130, 0x006d, 0x003b, 0x6a73, 0x0061, 0x003b, 0x4397, 0x006d, 0x006c, 0x803b, 0x00cb,
    0x40cb, 0x0100, 0x0069, 0x0070, 0x056a, 0x056f, 0x0073, 0x0074, 0x0073, 0x003b, 0x6203, 0x006f,
    0x006e, 0x0065, 0x006e, 0x0074, 0x0069, 0x0061, 0x006c, 0x0045, 0x003b, 0x6147, 0x0280, 0x0063,
    0x0066, 0x0069, 0x006f, 0x0073, 0x0585, 0x0588, 0x058d, 0x05b2, 0x05cc, 0x0079, 0x003b, 0x4424,
    0x0072, 0x003b, 0xc000, 0xd835, 0xdd09, 0x006c, 0x006c, 0x0065, 0x0064, 0x0253, 0x0597, 0x0000,
    0x0000, 0x05a3, 0x006d, 0x0061, 0x006c, 0x006c, 0x0053, 0x0071, 0x0075, 0x0061, 0x0072, 0x0065,
    0x003b, 0x65fc, 0x0065, 0x0072, 0x0079, 0x0053, 0x006d, 0x0061, 0x006c, 0x006c, 0x0053, 0x0071,
    0x0075, 0x0061, 0x0072, 0x0065, 0x003b, 0x65aa, 0x0370, 0x05ba, 0x0000, 0x05bf, 0x0000, 0x0000,
    0x05c4, 0x0066, 0x003b, 0xc000, 0xd835, 0xdd3d, 0x0041, 0x006c, 0x006c, 0x003b, 0x6200, 0x0072,
    0x0069, 0x0065, 0x0072, 0x0074, 0x0072, 0x0066, 0x003b, 0x6131, 0x0063, 0x00f2, 0x05cb, 0x0600,
    0x004a, 0x0054, 0x0061, 0x0062, 0x0063, 0x0064, 0x0066, 0x0067, 0x006f, 0x0072, 0x0073, 0x0074,
    0x05e8, 0x05ec, 0x05ef, 0x05fa, 0x0600, 0x0612, 0x0616, 0x061b, 0x061d, 0x0623, 0x066c, 0x0672,
    0x0063, 0x0079, 0x003b, 0x4403, 0x803b, 0x003e, 0x403e, 0x006d, 0x006d, 0x0061, 0x0100, 0x003b,
    0x0064, 0x05f7, 0x05f8, 0x4393, 0x003b, 0x43dc, 0x0072, 0x0065, 0x0076, 0x0065, 0x003b, 0x411e,
    0x0180, 0x0065, 0x0069, 0x0079, 0x0607, 0x060c, 0x0610, 0x0064, 0x0069, 0x006c, 0x003b, 0x4122,
    0x0072, 0x0063, 0x003b, 0x411c, 0x003b, 0x4413, 0x006f, 0x0074, 0x003b, 0x4120, 0x0072, 0x003b,
    0xc000, 0xd835, 0xdd0a, 0x003b, 0x62d9, 0x0070, 0x0066, 0x003b, 0xc000, 0xd835, 0xdd3e, 0x0065,
    0x0061, 0x0074, 0x0065, 0x0072, 0x0300, 0x0045, 0x0046, 0x0047, 0x004c, 0x0053, 0x0054, 0x0635,
    0x0644, 0x064e, 0x0656, 0x065b, 0x0666, 0x0071, 0x0075, 0x0061, 0x006c, 0x0100, 0x003b, 0x004c,
    0x063e, 0x063f, 0x6265, 0x0065, 0x0073, 0x0073, 0x003b, 0x62db, 0x0075, 0x006c, 0x006c, 0x0045,
    0x0071, 0x0075, 0x0061, 0x006c, 0x003b, 0x6267, 0x0072, 0x0065, 0x0061, 0x0074, 0x0065, 0x0072,
    0x003b, 0x6aa2, 0x0065, 0x0073, 0x0073, 0x003b, 0x6277, 0x006c, 0x0061, 0x006e, 0x0074, 0x0045,
    0x0071, 0x0075, 0x0061, 0x006c, 0x003b, 0x6a7e, 0x0069, 0x006c, 0x0064, 0x0065, 0x003b, 0x6273,
    0x0063, 0x0072, 0x003b, 0xc000, 0xd835, 0xdca2, 0x003b, 0x626b, 0x0400, 0x0041, 0x0061, 0x0063,
    0x0066, 0x0069, 0x006f, 0x0073, 0x0075, 0x0685, 0x068b, 0x0696, 0x069b, 0x069e, 0x06aa, 0x06be,
    0x06ca, 0x0052, 0x0044, 0x0063, 0x0079, 0x003b, 0x442a, 0x0100, 0x0063, 0x0074, 0x0690, 0x0694,
    0x0065, 0x006b, 0x003b, 0x42c7, 0x003b, 0x405e, 0x0069, 0x0072, 0x0063, 0x003b, 0x4124, 0x0072,
    0x003b, 0x610c, 0x006c, 0x0062, 0x0065, 0x0072, 0x0074, 0x0053, 0x0070, 0x0061, 0x0063, 0x0065,
    0x003b, 0x610b, 0x01f0, 0x06af, 0x0000, 0x06b2, 0x0066, 0x003b, 0x610d, 0x0069, 0x007a, 0x006f,
    0x006e, 0x0074, 0x0061, 0x006c, 0x004c, 0x0069, 0x006e, 0x0065, 0x003b, 0x6500, 0x0100, 0x0063,
    0x0074, 0x06c3, 0x06c5, 0x00f2, 0x06a9, 0x0072, 0x006f, 0x006b, 0x003b, 0x4126, 0x006d, 0x0070,
    0x0144, 0x06d0, 0x06d8, 0x006f, 0x0077, 0x006e, 0x0048, 0x0075, 0x006d, 0x00f0, 0x012f, 0x0071,
    0x0075, 0x0061, 0x006c, 0x003b, 0x624f, 0x0700, 0x0045, 0x004a, 0x004f, 0x0061, 0x0063, 0x0064,
    0x0066, 0x0067, 0x006d, 0x006e, 0x006f, 0x0073, 0x0074, 0x0075, 0x06fa, 0x06fe, 0x0703, 0x0707,
    0x070e, 0x071a, 0x071e, 0x0721, 0x0728, 0x0744, 0x0778, 0x078b, 0x078f, 0x0795, 0x0063, 0x0079,
    0x003b, 0x4415, 0x006c, 0x0069, 0x0067, 0x003b, 0x4132, 0x0063, 0x0079, 0x003b, 0x4401, 0x0063,
    0x0075, 0x0074, 0x0065, 0x803b, 0x00cd, 0x40cd, 0x0100, 0x0069, 0x0079, 0x0713, 0x0718, 0x0072,
    0x0063, 0x803b, 0x00ce, 0x40ce, 0x003b, 0x4418, 0x006f, 0x0074, 0x003b, 0x4130, 0x0072, 0x003b,
    0x6111, 0x0072, 0x0061, 0x0076, 0x0065, 0x803b, 0x00cc, 0x40cc, 0x0180, 0x003b, 0x0061, 0x0070,
    0x0720, 0x072f, 0x073f, 0x0100, 0x0063, 0x0067, 0x0734, 0x0737, 0x0072, 0x003b, 0x412a, 0x0069,
    0x006e, 0x0061, 0x0072, 0x0079, 0x0049, 0x003b, 0x6148, 0x006c, 0x0069, 0x0065, 0x00f3, 0x03dd,
    0x01f4, 0x0749, 0x0000, 0x0762, 0x0100, 0x003b, 0x0065, 0x074d, 0x074e, 0x622c, 0x0100, 0x0067,
    0x0072, 0x0753, 0x0758, 0x0072, 0x0061, 0x006c, 0x003b, 0x622b, 0x0073, 0x0065, 0x0063, 0x0074,
    0x0069, 0x006f, 0x006e, 0x003b, 0x62c2, 0x0069, 0x0073, 0x0069, 0x0062, 0x006c, 0x0065, 0x0100,
    0x0043, 0x0054, 0x076c, 0x0772, 0x006f, 0x006d, 0x006d, 0x0061, 0x003b, 0x6063, 0x0069, 0x006d,
    0x0065, 0x0073, 0x003b, 0x6062, 0x0180, 0x0067, 0x0070, 0x0074, 0x077f, 0x0783, 0x0788, 0x006f,
    0x006e, 0x003b, 0x412e, 0x0066, 0x003b, 0xc000, 0xd835, 0xdd40, 0x0061, 0x003b, 0x4399, 0x0063,
    0x0072, 0x003b, 0x6110, 0x0069, 0x006c, 0x0064, 0x0065, 0x003b, 0x4128, 0x01eb, 0x079a, 0x0000,
    0x079e, 0x0063, 0x0079, 0x003b, 0x4406, 0x006c, 0x803b, 0x00cf, 0x40cf, 0x0280, 0x0063, 0x0066,
    0x006f, 0x0073, 0x0075, 0x07ac, 0x07b7, 0x07bc, 0x07c2, 0x07d0, 0x0100, 0x0069, 0x0079, 0x07b1,
    0x07b5, 0x0072, 0x0063, 0x003b, 0x4134, 0x003b, 0x4419, 0x0072, 0x003b, 0xc000, 0xd835, 0xdd0d,
    0x0070, 0x0066, 0x003b, 0xc000, 0xd835, 0xdd41, 0x01e3, 0x07c7, 0x0000, 0x07cc, 0x0072, 0x003b,
    0xc000, 0xd835, 0xdca5, 0x0072, 0x0063, 0x0079, 0x003b, 0x4408, 0x006b, 0x0063, 0x0079, 0x003b,
    0x4404, 0x0380, 0x0048, 0x004a, 0x0061, 0x0063, 0x0066, 0x006f, 0x0073, 0x07e4, 0x07e8, 0x07ec,
    0x07f1, 0x07fd, 0x0802, 0x0808, 0x0063, 0x0079, 0x003b, 0x4425, 0x0063, 0x0079, 0x003b, 0x440c,
    0x0070, 0x0070, 0x0061, 0x003b, 0x439a, 0x0100, 0x0065, 0x0079, 0x07f6, 0x07fb, 0x0064, 0x0069,
    0x006c, 0x003b, 0x4136, 0x003b, 0x441a, 0x0072, 0x003b, 0xc000, 0xd835, 0xdd0e, 0x0070, 0x0066,
    0x003b, 0xc000, 0xd835, 0xdd42, 0x0063, 0x0072, 0x003b, 0xc000, 0xd835, 0xdca6, 0x0580, 0x004a,
    0x0054, 0x0061, 0x0063, 0x0065, 0x0066, 0x006c, 0x006d, 0x006f, 0x0073, 0x0074, 0x0825, 0x0829,
    0x082c, 0x0850, 0x0863, 0x09b3, 0x09b8, 0x09c7, 0x09cd, 0x0a37, 0x0a47, 0x0063, 0x0079, 0x003b,
    0x4409, 0x803b, 0x003c, 0x403c, 0x0280, 0x0063, 0x006d, 0x006e, 0x0070, 0x0072, 0x0837, 0x083c,
    0x0841, 0x0844, 0x084d, 0x0075, 0x0074, 0x0065, 0x003b, 0x4139, 0x0062, 0x0064, 0x0061, 0x003b,
    0x439b, 0x0067, 0x003b, 0x67ea, 0x006c, 0x0061, 0x0063, 0x0065, 0x0074, 0x0072, 0x0066, 0x003b,
    0x6112, 0x0072, 0x003b, 0x619e, 0x0180, 0x0061, 0x0065, 0x0079, 0x0857, 0x085c, 0x0861, 0x0072,
    0x006f, 0x006e, 0x003b, 0x413d, 0x0064, 0x0069, 0x006c, 0x003b, 0x413b, 0x003b, 0x441b, 0x0100,
    0x0066, 0x0073, 0x0868, 0x0970, 0x0074, 0x0500, 0x0041, 0x0043, 0x0044, 0x0046, 0x0052, 0x0054,
    0x0055, 0x0056, 0x0061, 0x0072, 0x087e, 0x08a9, 0x08b1, 0x08e0, 0x08e6, 0x08fc, 0x092f, 0x095b,
    0x0390, 0x096a, 0x0100, 0x006e, 0x0072, 0x0883, 0x088f, 0x0067, 0x006c, 0x0065, 0x0042, 0x0072,
    0x0061, 0x0063, 0x006b, 0x0065, 0x0074, 0x003b, 0x67e8, 0x0072, 0x006f, 0x0077, 0x0180, 0x003b,
    0x0042, 0x0052, 0x0899, 0x089a, 0x089e, 0x6190, 0x0061, 0x0072, 0x003b, 0x61e4, 0x0069, 0x0067,
    0x0068, 0x0074, 0x0041, 0x0072, 0x0072, 0x006f, 0x0077, 0x003b, 0x61c6, 0x0065, 0x0069, 0x006c,
    0x0069, 0x006e, 0x0067, 0x003b, 0x6308, 0x006f, 0x01f5, 0x08b7, 0x0000, 0x08c3, 0x0062, 0x006c,
    0x0065, 0x0042, 0x0072, 0x0061, 0x0063, 0x006b, 0x0065, 0x0074, 0x003b, 0x67e6, 0x006e, 0x01d4,
    0x08c8, 0x0000, 0x08d2, 0x0065, 0x0065, 0x0056, 0x0065, 0x0063, 0x0074, 0x006f, 0x0072, 0x003b,
    0x6961, 0x0065, 0x0063, 0x0074, 0x006f, 0x0072, 0x0100, 0x003b, 0x0042, 0x08db, 0x08dc, 0x61c3,
    0x0061, 0x0072, 0x003b, 0x6959, 0x006c, 0x006f, 0x006f, 0x0072, 0x003b, 0x630a, 0x0069, 0x0067,
    0x0068, 0x0074, 0x0100, 0x0041, 0x0056, 0x08ef, 0x08f5, 0x0072, 0x0072, 0x006f, 0x0077, 0x003b,
    0x6194, 0x0065, 0x0063, 0x0074, 0x006f, 0x0072, 0x003b, 0x694e, 0x0100, 0x0065, 0x0072, 0x0901,
    0x0917, 0x0065, 0x0180, 0x003b, 0x0041, 0x0056, 0x0909, 0x090a, 0x0910, 0x62a3, 0x0072, 0x0072,
    0x006f, 0x0077, 0x003b, 0x61a4, 0x0065, 0x0063, 0x0074, 0x006f, 0x0072, 0x003b, 0x695a, 0x0069,
    0x0061, 0x006e, 0x0067, 0x006c, 0x0065, 0x0180, 0x003b, 0x0042, 0x0045, 0x0924, 0x0925, 0x0929,
    0x62b2, 0x0061, 0x0072, 0x003b, 0x69cf, 0x0071, 0x0075, 0x0061, 0x006c, 0x003b, 0x62b4, 0x0070,
    0x0180, 0x0044, 0x0054, 0x0056, 0x0937, 0x0942, 0x094c, 0x006f, 0x0077, 0x006e, 0x0056, 0x0065,
    0x0063, 0x0074, 0x006f, 0x0072, 0x003b, 0x6951, 0x0065, 0x0065, 0x0056, 0x0065, 0x0063, 0x0074,
    0x006f, 0x0072, 0x003b, 0x6960, 0x0065, 0x0063, 0x0074, 0x006f, 0x0072, 0x0100, 0x003b, 0x0042,
    0x0956, 0x0957, 0x61bf, 0x0061, 0x0072, 0x003b, 0x6958, 0x0065, 0x0063, 0x0074, 0x006f, 0x0072,
    0x0100, 0x003b, 0x0042, 0x0965, 0x0966, 0x61bc, 0x0061, 0x0072, 0x003b, 0x6952, 0x0069, 0x0067,
    0x0068, 0x0074, 0x00e1, 0x039c, 0x0073, 0x0300, 0x0045, 0x0046, 0x0047, 0x004c, 0x0053, 0x0054,
    0x097e, 0x098b, 0x0995, 0x099d, 0x09a2, 0x09ad, 0x0071, 0x0075, 0x0061, 0x006c, 0x0047, 0x0072,
    0x0065, 0x0061, 0x0074, 0x0065, 0x0072, 0x003b, 0x62da, 0x0075, 0x006c, 0x006c, 0x0045, 0x0071,
    0x0075, 0x0061, 0x006c, 0x003b, 0x6266, 0x0072, 0x0065, 0x0061, 0x0074, 0x0065, 0x0072, 0x003b,
    0x6276, 0x0065, 0x0073, 0x0073, 0x003b, 0x6aa1, 0x006c, 0x0061, 0x006e, 0x0074, 0x0045, 0x0071,
    0x0075, 0x0061, 0x006c, 0x003b, 0x6a7d, 0x0069, 0x006c, 0x0064, 0x0065, 0x003b, 0x6272, 0x0072,
    0x003b, 0xc000, 0xd835, 0xdd0f, 0x0100, 0x003b, 0x0065, 0x09bd, 0x09be, 0x62d8, 0x0066, 0x0074,
    0x0061, 0x0072, 0x0072, 0x006f, 0x0077, 0x003b, 0x61da, 0x0069, 0x0064, 0x006f, 0x0074, 0x003b,
    0x413f, 0x0180, 0x006e, 0x0070, 0x0077, 0x09d4, 0x0a16, 0x0a1b, 0x0067, 0x0200, 0x004c, 0x0052,
    0x006c, 0x0072, 0x09de, 0x09f7, 0x0a02, 0x0a10, 0x0065, 0x0066, 0x0074, 0x0100, 0x0041, 0x0052,
    0x09e6, 0x09ec, 0x0072, 0x0072, 0x006f, 0x0077, 0x003b, 0x67f5, 0x0069, 0x0067, 0x0068, 0x0074,
    0x0041, 0x0072, 0x0072, 0x006f, 0x0077, 0x003b, 0x67f7, 0x0069, 0x0067, 0x0068, 0x0074, 0x0041,
    0x0072, 0x0072, 0x006f, 0x0077, 0x003b, 0x67f6, 0x0065, 0x0066, 0x0074, 0x0100, 0x0061, 0x0072,
    0x03b3, 0x0a0a, 0x0069, 0x0067, 0x0068, 0x0074, 0x00e1, 0x03bf, 0x0069, 0x0067, 0x0068, 0x0074,
    0x00e1, 0x03ca, 0x0066, 0x003b, 0xc000, 0xd835, 0xdd43, 0x0065, 0x0072, 0x0100, 0x004c, 0x0052,
    0x0a22, 0x0a2c, 0x0065, 0x0066, 0x0074, 0x0041, 0x0072, 0x0072, 0x006f, 0x0077, 0x003b, 0x6199,
    0x0069, 0x0067, 0x0068, 0x0074, 0x0041, 0x0072, 0x0072, 0x006f, 0x0077, 0x003b, 0x6198, 0x0180,
    0x0063, 0x0068, 0x0074, 0x0a3e, 0x0a40, 0x0a42, 0x00f2, 0x084c, 0x003b, 0x61b0, 0x0072, 0x006f,
    0x006b, 0x003b, 0x4141, 0x003b, 0x626a, 0x0400, 0x0061, 0x0063, 0x0065, 0x0066, 0x0069, 0x006f,
    0x0073, 0x0075, 0x0a5a, 0x0a5d, 0x0a60, 0x0a77, 0x0a7c, 0x0a85, 0x0a8b, 0x0a8e, 0x0070, 0x003b,
    0x6905, 0x0079, 0x003b, 0x441c, 0x0100, 0x0064, 0x006c, 0x0a65, 0x0a6f, 0x0069, 0x0075, 0x006d,
    0x0053, 0x0070, 0x0061, 0x0063, 0x0065, 0x003b, 0x605f, 0x006c, 0x0069, 0x006e, 0x0074, 0x0072,
    0x0066, 0x003b, 0x6133, 0x0072, 0x003b, 0xc000, 0xd835, 0xdd10, 0x006e, 0x0075, 0x0073, 0x0050,
    0x006c, 0x0075, 0x0073, 0x003b, 0x6213, 0x0070, 0x0066, 0x003b, 0xc000, 0xd835, 0xdd44, 0x0063,
    0x00f2, 0x0a76, 0x003b, 0x439c, 0x0480, 0x004a, 0x0061, 0x0063, 0x0065, 0x0066, 0x006f, 0x0073,
    0x0074, 0x0075, 0x0aa3, 0x0aa7, 0x0aad, 0x0ac0, 0x0b14, 0x0b19, 0x0d91, 0x0d97, 0x0d9e, 0x0063,
    0x0079, 0x003b, 0x440a, 0x0063, 0x0075, 0x0074, 0x0065, 0x003b, 0x4143, 0x0180, 0x0061, 0x0065,
    0x0079, 0x0ab4, 0x0ab9, 0x0abe, 0x0072, 0x006f, 0x006e, 0x003b, 0x4147, 0x0064, 0x0069, 0x006c,
    0x003b, 0x4145, 0x003b, 0x441d, 0x0180, 0x0067, 0x0073, 0x0077, 0x0ac7, 0x0af0, 0x0b0e, 0x0061,
    0x0074, 0x0069, 0x0076, 0x0065, 0x0180, 0x004d, 0x0054, 0x0056, 0x0ad3, 0x0adf, 0x0ae8, 0x0065,
    0x0064, 0x0069, 0x0075, 0x006d, 0x0053, 0x0070, 0x0061, 0x0063, 0x0065, 0x003b, 0x600b, 0x0068,
    0x0069, 0x0100, 0x0063, 0x006e, 0x0ae6, 0x0ad8, 0x00eb, 0x0ad9, 0x0065, 0x0072, 0x0079, 0x0054,
    0x0068, 0x0069, 0x00ee, 0x0ad9, 0x0074, 0x0065, 0x0064, 0x0100, 0x0047, 0x004c, 0x0af8, 0x0b06,
    0x0072, 0x0065, 0x0061, 0x0074, 0x0065, 0x0072, 0x0047, 0x0072, 0x0065, 0x0061, 0x0074, 0x0065,
    0x00f2, 0x0673, 0x0065, 0x0073, 0x0073, 0x004c, 0x0065, 0x0073, 0x00f3, 0x0a48, 0x004c, 0x0069,
    0x006e, 0x0065, 0x003b, 0x400a, 0x0072, 0x003b, 0xc000, 0xd835, 0xdd11, 0x0200, 0x0042, 0x006e,
    0x0070, 0x0074, 0x0b22, 0x0b28, 0x0b37, 0x0b3a, 0x0072, 0x0065, 0x0061, 0x006b, 0x003b, 0x6060,
    0x0042, 0x0072, 0x0065, 0x0061, 0x006b, 0x0069, 0x006e, 0x0067, 0x0053, 0x0070, 0x0061, 0x0063,
    0x0065, 0x003b, 0x40a0, 0x0066, 0x003b, 0x6115, 0x0680, 0x003b, 0x0043, 0x0044, 0x0045, 0x0047,
    0x0048, 0x004c, 0x004e, 0x0050, 0x0052, 0x0053, 0x0054, 0x0056, 0x0b55, 0x0b56, 0x0b6a, 0x0b7c,
    0x0ba1, 0x0beb, 0x0c04, 0x0c5e, 0x0c84, 0x0ca6, 0x0cd8, 0x0d61, 0x0d85, 0x6aec, 0x0100, 0x006f,
    0x0075, 0x0b5b, 0x0b64, 0x006e, 0x0067, 0x0072, 0x0075, 0x0065, 0x006e, 0x0074, 0x003b, 0x6262,
    0x0070, 0x0043, 0x0061, 0x0070, 0x003b, 0x626d, 0x006f, 0x0075, 0x0062, 0x006c, 0x0065, 0x0056,
    0x0065, 0x0072, 0x0074, 0x0069, 0x0063, 0x0061, 0x006c, 0x0042, 0x0061, 0x0072, 0x003b, 0x6226,
    0x0180, 0x006c, 0x0071, 0x0078, 0x0b83, 0x0b8a, 0x0b9b, 0x0065, 0x006d, 0x0065, 0x006e, 0x0074,
    0x003b, 0x6209, 0x0075, 0x0061, 0x006c, 0x0100, 0x003b, 0x0054, 0x0b92, 0x0b93, 0x6260, 0x0069,
    0x006c, 0x0064, 0x0065, 0x003b, 0xc000, 0x2242, 0x0338, 0x0069, 0x0073, 0x0074, 0x0073, 0x003b,
    0x6204, 0x0072, 0x0065, 0x0061, 0x0074, 0x0065, 0x0072, 0x0380, 0x003b, 0x0045, 0x0046, 0x0047,
    0x004c, 0x0053, 0x0054, 0x0bb6, 0x0bb7, 0x0bbd, 0x0bc9, 0x0bd3, 0x0bd8, 0x0be5, 0x626f, 0x0071,
    0x0075, 0x0061, 0x006c, 0x003b, 0x6271, 0x0075, 0x006c, 0x006c, 0x0045, 0x0071, 0x0075, 0x0061,
    0x006c, 0x003b, 0xc000, 0x2267, 0x0338, 0x0072, 0x0065, 0x0061, 0x0074, 0x0065, 0x0072, 0x003b,
    0xc000, 0x226b, 0x0338, 0x0065, 0x0073, 0x0073, 0x003b, 0x6279, 0x006c, 0x0061, 0x006e, 0x0074,
    0x0045, 0x0071, 0x0075, 0x0061, 0x006c, 0x003b, 0xc000, 0x2a7e, 0x0338, 0x0069, 0x006c, 0x0064,
    0x0065, 0x003b, 0x6275, 0x0075, 0x006d, 0x0070, 0x0144, 0x0bf2, 0x0bfd, 0x006f, 0x0077, 0x006e,
    0x0048, 0x0075, 0x006d, 0x0070, 0x003b, 0xc000, 0x224e, 0x0338, 0x0071, 0x0075, 0x0061, 0x006c,
    0x003b, 0xc000, 0x224f, 0x0338, 0x0065, 0x0100, 0x0066, 0x0073, 0x0c0a, 0x0c27, 0x0074, 0x0054,
    0x0072, 0x0069, 0x0061, 0x006e, 0x0067, 0x006c, 0x0065, 0x0180, 0x003b, 0x0042, 0x0045, 0x0c1a,
    0x0c1b, 0x0c21, 0x62ea, 0x0061, 0x0072, 0x003b, 0xc000, 0x29cf, 0x0338, 0x0071, 0x0075, 0x0061,
    0x006c, 0x003b, 0x62ec, 0x0073, 0x0300, 0x003b, 0x0045, 0x0047, 0x004c, 0x0053, 0x0054, 0x0c35,
    0x0c36, 0x0c3c, 0x0c44, 0x0c4b, 0x0c58, 0x626e, 0x0071, 0x0075, 0x0061, 0x006c, 0x003b, 0x6270,
    0x0072, 0x0065, 0x0061, 0x0074, 0x0065, 0x0072, 0x003b, 0x6278, 0x0065, 0x0073, 0x0073, 0x003b,
    0xc000, 0x226a, 0x0338, 0x006c, 0x0061, 0x006e, 0x0074, 0x0045, 0x0071, 0x0075, 0x0061, 0x006c,
    0x003b, 0xc000, 0x2a7d, 0x0338, 0x0069, 0x006c, 0x0064, 0x0065, 0x003b, 0x6274, 0x0065, 0x0073,
    0x0074, 0x0065, 0x0064, 0x0100, 0x0047, 0x004c, 0x0c68, 0x0c79, 0x0072, 0x0065, 0x0061, 0x0074,
    0x0065, 0x0072, 0x0047, 0x0072, 0x0065, 0x0061, 0x0074, 0x0065, 0x0072, 0x003b, 0xc000, 0x2aa2,
    0x0338, 0x0065, 0x0073, 0x0073, 0x004c, 0x0065, 0x0073, 0x0073, 0x003b, 0xc000, 0x2aa1, 0x0338,
    0x0072, 0x0065, 0x0063, 0x0065, 0x0064, 0x0065, 0x0073, 0x0180, 0x003b, 0x0045, 0x0053, 0x0c92,
    0x0c93, 0x0c9b, 0x6280, 0x0071, 0x0075, 0x0061, 0x006c, 0x003b, 0xc000, 0x2aaf, 0x0338, 0x006c,
    0x0061, 0x006e, 0x0074, 0x0045, 0x0071, 0x0075, 0x0061, 0x006c, 0x003b, 0x62e0, 0x0100, 0x0065,
    0x0069, 0x0cab, 0x0cb9, 0x0076, 0x0065, 0x0072, 0x0073, 0x0065, 0x0045, 0x006c, 0x0065, 0x006d,
    0x0065, 0x006e, 0x0074, 0x003b, 0x620c, 0x0067, 0x0068, 0x0074, 0x0054, 0x0072, 0x0069, 0x0061,
    0x006e, 0x0067, 0x006c, 0x0065, 0x0180, 0x003b, 0x0042, 0x0045, 0x0ccb, 0x0ccc, 0x0cd2, 0x62eb,
    0x0061, 0x0072, 0x003b, 0xc000, 0x29d0, 0x0338, 0x0071, 0x0075, 0x0061, 0x006c, 0x003b, 0x62ed,
    0x0100, 0x0071, 0x0075, 0x0cdd, 0x0d0c, 0x0075, 0x0061, 0x0072, 0x0065, 0x0053, 0x0075, 0x0100,
    0x0062, 0x0070, 0x0ce8, 0x0cf9, 0x0073, 0x0065, 0x0074, 0x0100, 0x003b, 0x0045, 0x0cf0, 0x0cf3,
    0xc000, 0x228f, 0x0338, 0x0071, 0x0075, 0x0061, 0x006c, 0x003b, 0x62e2, 0x0065, 0x0072, 0x0073,
    0x0065, 0x0074, 0x0100, 0x003b, 0x0045, 0x0d03, 0x0d06, 0xc000, 0x2290, 0x0338, 0x0071, 0x0075,
    0x0061, 0x006c, 0x003b, 0x62e3, 0x0180, 0x0062, 0x0063, 0x0070, 0x0d13, 0x0d24, 0x0d4e, 0x0073,
    0x0065, 0x0074, 0x0100, 0x003b, 0x0045, 0x0d1b, 0x0d1e, 0xc000, 0x2282, 0x20d2, 0x0071, 0x0075,
    0x0061, 0x006c, 0x003b, 0x6288, 0x0063, 0x0065, 0x0065, 0x0064, 0x0073, 0x0200, 0x003b, 0x0045,
    0x0053, 0x0054, 0x0d32, 0x0d33, 0x0d3b, 0x0d46, 0x6281, 0x0071, 0x0075, 0x0061, 0x006c, 0x003b,
    0xc000, 0x2ab0, 0x0338, 0x006c, 0x0061, 0x006e, 0x0074, 0x0045, 0x0071, 0x0075, 0x0061, 0x006c,
    0x003b, 0x62e1, 0x0069, 0x006c, 0x0064, 0x0065, 0x003b, 0xc000, 0x227f, 0x0338, 0x0065, 0x0072,
    0x0073, 0x0065, 0x0074, 0x0100, 0x003b, 0x0045, 0x0d58, 0x0d5b, 0xc000, 0x2283, 0x20d2, 0x0071,
    0x0075, 0x0061, 0x006c, 0x003b, 0x6289, 0x0069, 0x006c, 0x0064, 0x0065, 0x0200, 0x003b, 0x0045,
    0x0046, 0x0054, 0x0d6e, 0x0d6f, 0x0d75, 0x0d7f, 0x6241, 0x0071, 0x0075, 0x0061, 0x006c, 0x003b,
    0x6244, 0x0075, 0x006c, 0x006c, 0x0045, 0x0071, 0x0075, 0x0061, 0x006c, 0x003b, 0x6247, 0x0069,
    0x006c, 0x0064, 0x0065, 0x003b, 0x6249, 0x0065, 0x0072, 0x0074, 0x0069, 0x0063, 0x0061, 0x006c,
    0x0042, 0x0061, 0x0072, 0x003b, 0x6224, 0x0063, 0x0072, 0x003b, 0xc000, 0xd835, 0xdca9, 0x0069,
    0x006c, 0x0064, 0x0065, 0x803b, 0x00d1, 0x40d1, 0x003b, 0x439d, 0x0700, 0x0045, 0x0061, 0x0063,
    0x0064, 0x0066, 0x0067, 0x006d, 0x006f, 0x0070, 0x0072, 0x0073, 0x0074, 0x0075, 0x0076, 0x0dbd,
    0x0dc2, 0x0dc9, 0x0dd5, 0x0ddb, 0x0de0, 0x0de7, 0x0dfc, 0x0e02, 0x0e20, 0x0e22, 0x0e32, 0x0e3f,
    0x0e44, 0x006c, 0x0069, 0x0067, 0x003b, 0x4152, 0x0063, 0x0075, 0x0074, 0x0065, 0x803b, 0x00d3,
    0x40d3, 0x0100, 0x0069, 0x0079, 0x0dce, 0x0dd3, 0x0072, 0x0063, 0x803b, 0x00d4, 0x40d4, 0x003b,
    0x441e, 0x0062, 0x006c, 0x0061, 0x0063, 0x003b, 0x4150, 0x0072, 0x003b, 0xc000, 0xd835, 0xdd12,
    0x0072, 0x0061, 0x0076, 0x0065, 0x803b, 0x00d2, 0x40d2, 0x0180, 0x0061, 0x0065, 0x0069, 0x0dee,
    0x0df2, 0x0df6, 0x0063, 0x0072, 0x003b, 0x414c, 0x0067, 0x0061, 0x003b, 0x43a9, 0x0063, 0x0072,
    0x006f, 0x006e, 0x003b, 0x439f, 0x0070, 0x0066, 0x003b, 0xc000, 0xd835, 0xdd46, 0x0065, 0x006e,
    0x0043, 0x0075, 0x0072, 0x006c, 0x0079, 0x0100, 0x0044, 0x0051, 0x0e0e, 0x0e1a, 0x006f, 0x0075,
    0x0062, 0x006c, 0x0065, 0x0051, 0x0075, 0x006f, 0x0074, 0x0065, 0x003b, 0x601c, 0x0075, 0x006f,
    0x0074, 0x0065, 0x003b, 0x6018, 0x003b, 0x6a54, 0x0100, 0x0063, 0x006c, 0x0e27, 0x0e2c, 0x0072,
    0x003b, 0xc000, 0xd835, 0xdcaa, 0x0061, 0x0073, 0x0068, 0x803b, 0x00d8, 0x40d8, 0x0069, 0x016c,
    0x0e37, 0x0e3c, 0x0064, 0x0065, 0x803b, 0x00d5, 0x40d5, 0x0065, 0x0073, 0x003b, 0x6a37, 0x006d,
    0x006c, 0x803b, 0x00d6, 0x40d6, 0x0065, 0x0072, 0x0100, 0x0042, 0x0050, 0x0e4b, 0x0e60, 0x0100,
    0x0061, 0x0072, 0x0e50, 0x0e53, 0x0072, 0x003b, 0x603e, 0x0061, 0x0063, 0x0100, 0x0065, 0x006b,
    0x0e5a, 0x0e5c, 0x003b, 0x63de, 0x0065, 0x0074, 0x003b, 0x63b4, 0x0061, 0x0072, 0x0065, 0x006e,
    0x0074, 0x0068, 0x0065, 0x0073, 0x0069, 0x0073, 0x003b, 0x63dc, 0x0480, 0x0061, 0x0063, 0x0066,
    0x0068, 0x0069, 0x006c, 0x006f, 0x0072, 0x0073, 0x0e7f, 0x0e87, 0x0e8a, 0x0e8f, 0x0e92, 0x0e94,
    0x0e9d, 0x0eb0, 0x0efc, 0x0072, 0x0074, 0x0069, 0x0061, 0x006c, 0x0044, 0x003b, 0x6202, 0x0079,
    0x003b, 0x441f, 0x0072, 0x003b, 0xc000, 0xd835, 0xdd13, 0x0069, 0x003b, 0x43a6, 0x003b, 0x43a0,
    0x0075, 0x0073, 0x004d, 0x0069, 0x006e, 0x0075, 0x0073, 0x003b, 0x40b1, 0x0100, 0x0069, 0x0070,
    0x0ea2, 0x0ead, 0x006e, 0x0063, 0x0061, 0x0072, 0x0065, 0x0070, 0x006c, 0x0061, 0x006e, 0x00e5,
    0x069d, 0x0066, 0x003b, 0x6119, 0x0200, 0x003b, 0x0065, 0x0069, 0x006f, 0x0eb9, 0x0eba, 0x0ee0,
    0x0ee4, 0x6abb, 0x0063, 0x0065, 0x0064, 0x0065, 0x0073, 0x0200, 0x003b, 0x0045, 0x0053, 0x0054,
    0x0ec8, 0x0ec9, 0x0ecf, 0x0eda, 0x627a, 0x0071, 0x0075, 0x0061, 0x006c, 0x003b, 0x6aaf, 0x006c,
    0x0061, 0x006e, 0x0074, 0x0045, 0x0071, 0x0075, 0x0061, 0x006c, 0x003b, 0x627c, 0x0069, 0x006c,
    0x0064, 0x0065, 0x003b, 0x627e, 0x006d, 0x0065, 0x003b, 0x6033, 0x0100, 0x0064, 0x0070, 0x0ee9,
    0x0eee, 0x0075, 0x0063, 0x0074, 0x003b, 0x620f, 0x006f, 0x0072, 0x0074, 0x0069, 0x006f, 0x006e,
    0x0100, 0x003b, 0x0061, 0x0225, 0x0ef9, 0x006c, 0x003b, 0x621d, 0x0100, 0x0063, 0x0069, 0x0f01,
    0x0f06, 0x0072, 0x003b, 0xc000, 0xd835, 0xdcab, 0x003b, 0x43a8, 0x0200, 0x0055, 0x0066, 0x006f,
    0x0073, 0x0f11, 0x0f16, 0x0f1b, 0x0f1f, 0x004f, 0x0054, 0x803b, 0x0022, 0x4022, 0x0072, 0x003b,
    0xc000, 0xd835, 0xdd14, 0x0070, 0x0066, 0x003b, 0x611a, 0x0063, 0x0072, 0x003b, 0xc000, 0xd835,
    0xdcac, 0x0600, 0x0042, 0x0045, 0x0061, 0x0063, 0x0065, 0x0066, 0x0068, 0x0069, 0x006f, 0x0072,
    0x0073, 0x0075, 0x0f3e, 0x0f43, 0x0f47, 0x0f60, 0x0f73, 0x0fa7, 0x0faa, 0x0fad, 0x1096, 0x10a9,
    0x10b4, 0x10be, 0x0061, 0x0072, 0x0072, 0x003b, 0x6910, 0x0047, 0x803b, 0x00ae, 0x40ae, 0x0180,
    0x0063, 0x006e, 0x0072, 0x0f4e, 0x0f53, 0x0f56, 0x0075, 0x0074, 0x0065, 0x003b, 0x4154, 0x0067,
    0x003b, 0x67eb, 0x0072, 0x0100, 0x003b, 0x0074, 0x0f5c, 0x0f5d, 0x61a0, 0x006c, 0x003b, 0x6916,
    0x0180, 0x0061, 0x0065, 0x0079, 0x0f67, 0x0f6c, 0x0f71, 0x0072, 0x006f, 0x006e, 0x003b, 0x4158,
    0x0064, 0x0069, 0x006c, 0x003b, 0x4156, 0x003b, 0x4420, 0x0100, 0x003b, 0x0076, 0x0f78, 0x0f79,
    0x611c, 0x0065, 0x0072, 0x0073, 0x0065, 0x0100, 0x0045, 0x0055, 0x0f82, 0x0f99, 0x0100, 0x006c,
    0x0071, 0x0f87, 0x0f8e, 0x0065, 0x006d, 0x0065, 0x006e, 0x0074, 0x003b, 0x620b, 0x0075, 0x0069,
    0x006c, 0x0069, 0x0062, 0x0072, 0x0069, 0x0075, 0x006d, 0x003b, 0x61cb, 0x0070, 0x0045, 0x0071,
    0x0075, 0x0069, 0x006c, 0x0069, 0x0062, 0x0072, 0x0069, 0x0075, 0x006d, 0x003b, 0x696f, 0x0072,
    0x00bb, 0x0f79, 0x006f, 0x003b, 0x43a1, 0x0067, 0x0068, 0x0074, 0x0400, 0x0041, 0x0043, 0x0044,
    0x0046, 0x0054, 0x0055, 0x0056, 0x0061, 0x0fc1, 0x0feb, 0x0ff3, 0x1022, 0x1028, 0x105b, 0x1087,
    0x03d8, 0x0100, 0x006e, 0x0072, 0x0fc6, 0x0fd2, 0x0067, 0x006c, 0x0065, 0x0042, 0x0072, 0x0061,
    0x0063, 0x006b, 0x0065, 0x0074, 0x003b, 0x67e9, 0x0072, 0x006f, 0x0077, 0x0180, 0x003b, 0x0042,
    0x004c, 0x0fdc, 0x0fdd, 0x0fe1, 0x6192, 0x0061, 0x0072, 0x003b, 0x61e5, 0x0065, 0x0066, 0x0074,
    0x0041, 0x0072, 0x0072, 0x006f, 0x0077, 0x003b, 0x61c4, 0x0065, 0x0069, 0x006c, 0x0069, 0x006e,
    0x0067, 0x003b, 0x6309, 0x006f, 0x01f5, 0x0ff9, 0x0000, 0x1005, 0x0062, 0x006c, 0x0065, 0x0042,
    0x0072, 0x0061, 0x0063, 0x006b, 0x0065, 0x0074, 0x003b, 0x67e7, 0x006e, 0x01d4, 0x100a, 0x0000,
    0x1014, 0x0065, 0x0065, 0x0056, 0x0065, 0x0063, 0x0074, 0x006f, 0x0072, 0x003b, 0x695d, 0x0065,
    0x0063, 0x0074, 0x006f, 0x0072, 0x0100, 0x003b, 0x0042, 0x101d, 0x101e, 0x61c2, 0x0061, 0x0072,
    0x003b, 0x6955, 0x006c, 0x006f, 0x006f, 0x0072, 0x003b, 0x630b, 0x0100, 0x0065, 0x0072, 0x102d,
    0x1043, 0x0065, 0x0180, 0x003b, 0x0041, 0x0056, 0x1035, 0x1036, 0x103c, 0x62a2, 0x0072, 0x0072,
    0x006f, 0x0077, 0x003b, 0x61a6, 0x0065, 0x0063, 0x0074, 0x006f, 0x0072, 0x003b, 0x695b, 0x0069,
    0x0061, 0x006e, 0x0067, 0x006c, 0x0065, 0x0180, 0x003b, 0x0042, 0x0045, 0x1050, 0x1051, 0x1055,
    0x62b3, 0x0061, 0x0072, 0x003b, 0x69d0, 0x0071, 0x0075, 0x0061, 0x006c, 0x003b, 0x62b5, 0x0070,
    0x0180, 0x0044, 0x0054, 0x0056, 0x1063, 0x106e, 0x1078, 0x006f, 0x0077, 0x006e, 0x0056, 0x0065,
    0x0063, 0x0074, 0x006f, 0x0072, 0x003b, 0x694f, 0x0065, 0x0065, 0x0056, 0x0065, 0x0063, 0x0074,
    0x006f, 0x0072, 0x003b, 0x695c, 0x0065, 0x0063, 0x0074, 0x006f, 0x0072, 0x0100, 0x003b, 0x0042,
    0x1082, 0x1083, 0x61be, 0x0061, 0x0072, 0x003b, 0x6954, 0x0065, 0x0063, 0x0074, 0x006f, 0x0072,
    0x0100, 0x003b, 0x0042, 0x1091, 0x1092, 0x61c0, 0x0061, 0x0072, 0x003b, 0x6953, 0x0100, 0x0070,
    0x0075, 0x109b, 0x109e, 0x0066, 0x003b, 0x611d, 0x006e, 0x0064, 0x0049, 0x006d, 0x0070, 0x006c,
    0x0069, 0x0065, 0x0073, 0x003b, 0x6970, 0x0069, 0x0067, 0x0068, 0x0074, 0x0061, 0x0072, 0x0072,
    0x006f, 0x0077, 0x003b, 0x61db, 0x0100, 0x0063, 0x0068, 0x10b9, 0x10bc, 0x0072, 0x003b, 0x611b,
    0x003b, 0x61b1, 0x006c, 0x0065, 0x0044, 0x0065, 0x006c, 0x0061, 0x0079, 0x0065, 0x0064, 0x003b,
    0x69f4, 0x0680, 0x0048, 0x004f, 0x0061, 0x0063, 0x0066, 0x0068, 0x0069, 0x006d, 0x006f, 0x0071,
    0x0073, 0x0074, 0x0075, 0x10e4, 0x10f1, 0x10f7, 0x10fd, 0x1119, 0x111e, 0x1151, 0x1156, 0x1161,
    0x1167, 0x11b5, 0x11bb, 0x11bf, 0x0100, 0x0043, 0x0063, 0x10e9, 0x10ee, 0x0048, 0x0063, 0x0079,
    0x003b, 0x4429, 0x0079, 0x003b, 0x4428, 0x0046, 0x0054, 0x0063, 0x0079, 0x003b, 0x442c, 0x0063,
    0x0075, 0x0074, 0x0065, 0x003b, 0x415a, 0x0280, 0x003b, 0x0061, 0x0065, 0x0069, 0x0079, 0x1108,
    0x1109, 0x110e, 0x1113, 0x1117, 0x6abc, 0x0072, 0x006f, 0x006e, 0x003b, 0x4160, 0x0064, 0x0069,
    0x006c, 0x003b, 0x415e, 0x0072, 0x0063, 0x003b, 0x415c, 0x003b, 0x4421, 0x0072, 0x003b, 0xc000,
    0xd835, 0xdd16, 0x006f, 0x0072, 0x0074, 0x0200, 0x0044, 0x004c, 0x0052, 0x0055, 0x112a, 0x1134,
    0x113e, 0x1149, 0x006f, 0x0077, 0x006e, 0x0041, 0x0072, 0x0072, 0x006f, 0x0077, 0x00bb, 0x041e,
    0x0065, 0x0066, 0x0074, 0x0041, 0x0072, 0x0072, 0x006f, 0x0077, 0x00bb, 0x089a, 0x0069, 0x0067,
    0x0068, 0x0074, 0x0041, 0x0072, 0x0072, 0x006f, 0x0077, 0x00bb, 0x0fdd, 0x0070, 0x0041, 0x0072,
    0x0072, 0x006f, 0x0077, 0x003b, 0x6191, 0x0067, 0x006d, 0x0061, 0x003b, 0x43a3, 0x0061, 0x006c,
    0x006c, 0x0043, 0x0069, 0x0072, 0x0063, 0x006c, 0x0065, 0x003b, 0x6218, 0x0070, 0x0066, 0x003b,
    0xc000, 0xd835, 0xdd4a, 0x0272, 0x116d, 0x0000, 0x0000, 0x1170, 0x0074, 0x003b, 0x621a, 0x0061,
    0x0072, 0x0065, 0x0200, 0x003b, 0x0049, 0x0053, 0x0055, 0x117b, 0x117c, 0x1189, 0x11af, 0x65a1,
    0x006e, 0x0074, 0x0065, 0x0072, 0x0073, 0x0065, 0x0063, 0x0074, 0x0069, 0x006f, 0x006e, 0x003b,
    0x6293, 0x0075, 0x0100, 0x0062, 0x0070, 0x118f, 0x119e, 0x0073, 0x0065, 0x0074, 0x0100, 0x003b,
    0x0045, 0x1197, 0x1198, 0x628f, 0x0071, 0x0075, 0x0061, 0x006c, 0x003b, 0x6291, 0x0065, 0x0072,
    0x0073, 0x0065, 0x0074, 0x0100, 0x003b, 0x0045, 0x11a8, 0x11a9, 0x6290, 0x0071, 0x0075, 0x0061,
    0x006c, 0x003b, 0x6292, 0x006e, 0x0069, 0x006f, 0x006e, 0x003b, 0x6294, 0x0063, 0x0072, 0x003b,
    0xc000, 0xd835, 0xdcae, 0x0061, 0x0072, 0x003b, 0x62c6, 0x0200, 0x0062, 0x0063, 0x006d, 0x0070,
    0x11c8, 0x11db, 0x1209, 0x120b, 0x0100, 0x003b, 0x0073, 0x11cd, 0x11ce, 0x62d0, 0x0065, 0x0074,
    0x0100, 0x003b, 0x0045, 0x11cd, 0x11d5, 0x0071, 0x0075, 0x0061, 0x006c, 0x003b, 0x6286, 0x0100,
    0x0063, 0x0068, 0x11e0, 0x1205, 0x0065, 0x0065, 0x0064, 0x0073, 0x0200, 0x003b, 0x0045, 0x0053,
    0x0054, 0x11ed, 0x11ee, 0x11f4, 0x11ff, 0x627b, 0x0071, 0x0075, 0x0061, 0x006c, 0x003b, 0x6ab0,
    0x006c, 0x0061, 0x006e, 0x0074, 0x0045, 0x0071, 0x0075, 0x0061, 0x006c, 0x003b, 0x627d, 0x0069,
    0x006c, 0x0064, 0x0065, 0x003b, 0x627f, 0x0054, 0x0068, 0x00e1, 0x0f8c, 0x003b, 0x6211, 0x0180,
    0x003b, 0x0065, 0x0073, 0x1212, 0x1213, 0x1223, 0x62d1, 0x0072, 0x0073, 0x0065, 0x0074, 0x0100,
    0x003b, 0x0045, 0x121c, 0x121d, 0x6283, 0x0071, 0x0075, 0x0061, 0x006c, 0x003b, 0x6287, 0x0065,
    0x0074, 0x00bb, 0x1213, 0x0580, 0x0048, 0x0052, 0x0053, 0x0061, 0x0063, 0x0066, 0x0068, 0x0069,
    0x006f, 0x0072, 0x0073, 0x123e, 0x1244, 0x1249, 0x1255, 0x125e, 0x1271, 0x1276, 0x129f, 0x12c2,
    0x12c8, 0x12d1, 0x004f, 0x0052, 0x004e, 0x803b, 0x00de, 0x40de, 0x0041, 0x0044, 0x0045, 0x003b,
    0x6122, 0x0100, 0x0048, 0x0063, 0x124e, 0x1252, 0x0063, 0x0079, 0x003b, 0x440b, 0x0079, 0x003b,
    0x4426, 0x0100, 0x0062, 0x0075, 0x125a, 0x125c, 0x003b, 0x4009, 0x003b, 0x43a4, 0x0180, 0x0061,
    0x0065, 0x0079, 0x1265, 0x126a, 0x126f, 0x0072, 0x006f, 0x006e, 0x003b, 0x4164, 0x0064, 0x0069,
    0x006c, 0x003b, 0x4162, 0x003b, 0x4422, 0x0072, 0x003b, 0xc000, 0xd835, 0xdd17, 0x0100, 0x0065,
    0x0069, 0x127b, 0x1289, 0x01f2, 0x1280, 0x0000, 0x1287, 0x0065, 0x0066, 0x006f, 0x0072, 0x0065,
    0x003b, 0x6234, 0x0061, 0x003b, 0x4398, 0x0100, 0x0063, 0x006e, 0x128e, 0x1298, 0x006b, 0x0053,
    0x0070, 0x0061, 0x0063, 0x0065, 0x003b, 0xc000, 0x205f, 0x200a, 0x0053, 0x0070, 0x0061, 0x0063,
    0x0065, 0x003b, 0x6009, 0x006c, 0x0064, 0x0065, 0x0200, 0x003b, 0x0045, 0x0046, 0x0054, 0x12ab,
    0x12ac, 0x12b2, 0x12bc, 0x623c, 0x0071, 0x0075, 0x0061, 0x006c, 0x003b, 0x6243, 0x0075, 0x006c,
    0x006c, 0x0045, 0x0071, 0x0075, 0x0061, 0x006c, 0x003b, 0x6245, 0x0069, 0x006c, 0x0064, 0x0065,
    0x003b, 0x6248, 0x0070, 0x0066, 0x003b, 0xc000, 0xd835, 0xdd4b, 0x0069, 0x0070, 0x006c, 0x0065,
    0x0044, 0x006f, 0x0074, 0x003b, 0x60db, 0x0100, 0x0063, 0x0074, 0x12d6, 0x12db, 0x0072, 0x003b,
    0xc000, 0xd835, 0xdcaf, 0x0072, 0x006f, 0x006b, 0x003b, 0x4166, 0x0ae1, 0x12f7, 0x130e, 0x131a,
    0x1326, 0x0000, 0x132c, 0x1331, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1338, 0x133d, 0x1377,
    0x1385, 0x0000, 0x13ff, 0x1404, 0x140a, 0x1410, 0x0100, 0x0063, 0x0072, 0x12fb, 0x1301, 0x0075,
    0x0074, 0x0065, 0x803b, 0x00da, 0x40da, 0x0072, 0x0100, 0x003b, 0x006f, 0x1307, 0x1308, 0x619f,
    0x0063, 0x0069, 0x0072, 0x003b, 0x6949, 0x0072, 0x01e3, 0x1313, 0x0000, 0x1316, 0x0079, 0x003b,
    0x440e, 0x0076, 0x0065, 0x003b, 0x416c, 0x0100, 0x0069, 0x0079, 0x131e, 0x1323, 0x0072, 0x0063,
    0x803b, 0x00db, 0x40db, 0x003b, 0x4423, 0x0062, 0x006c, 0x0061, 0x0063, 0x003b, 0x4170, 0x0072,
    0x003b, 0xc000, 0xd835, 0xdd18, 0x0072, 0x0061, 0x0076, 0x0065, 0x803b, 0x00d9, 0x40d9, 0x0061,
    0x0063, 0x0072, 0x003b, 0x416a, 0x0100, 0x0064, 0x0069, 0x1341, 0x1369, 0x0065, 0x0072, 0x0100,
    0x0042, 0x0050, 0x1348, 0x135d, 0x0100, 0x0061, 0x0072, 0x134d, 0x1350, 0x0072, 0x003b, 0x405f,
    0x0061, 0x0063, 0x0100, 0x0065, 0x006b, 0x1357, 0x1359, 0x003b, 0x63df, 0x0065, 0x0074, 0x003b,
    0x63b5, 0x0061, 0x0072, 0x0065, 0x006e, 0x0074, 0x0068, 0x0065, 0x0073, 0x0069, 0x0073, 0x003b,
    0x63dd, 0x006f, 0x006e, 0x0100, 0x003b, 0x0050, 0x1370, 0x1371, 0x62c3, 0x006c, 0x0075, 0x0073,
    0x003b, 0x628e, 0x0100, 0x0067, 0x0070, 0x137b, 0x137f, 0x006f, 0x006e, 0x003b, 0x4172, 0x0066,
    0x003b, 0xc000, 0xd835, 0xdd4c, 0x0400, 0x0041, 0x0044, 0x0045, 0x0054, 0x0061, 0x0064, 0x0070,
    0x0073, 0x1395, 0x13ae, 0x13b8, 0x13c4, 0x03e8, 0x13d2, 0x13d7, 0x13f3, 0x0072, 0x0072, 0x006f,
    0x0077, 0x0180, 0x003b, 0x0042, 0x0044, 0x1150, 0x13a0, 0x13a4, 0x0061, 0x0072, 0x003b, 0x6912,
    0x006f, 0x0077, 0x006e, 0x0041, 0x0072, 0x0072, 0x006f, 0x0077, 0x003b, 0x61c5, 0x006f, 0x0077,
    0x006e, 0x0041, 0x0072, 0x0072, 0x006f, 0x0077, 0x003b, 0x6195, 0x0071, 0x0075, 0x0069, 0x006c,
    0x0069, 0x0062, 0x0072, 0x0069, 0x0075, 0x006d, 0x003b, 0x696e, 0x0065, 0x0065, 0x0100, 0x003b,
    0x0041, 0x13cb, 0x13cc, 0x62a5, 0x0072, 0x0072, 0x006f, 0x0077, 0x003b, 0x61a5, 0x006f, 0x0077,
    0x006e, 0x00e1, 0x03f3, 0x0065, 0x0072, 0x0100, 0x004c, 0x0052, 0x13de, 0x13e8, 0x0065, 0x0066,
    0x0074, 0x0041, 0x0072, 0x0072, 0x006f, 0x0077, 0x003b, 0x6196, 0x0069, 0x0067, 0x0068, 0x0074,
    0x0041, 0x0072, 0x0072, 0x006f, 0x0077, 0x003b, 0x6197, 0x0069, 0x0100, 0x003b, 0x006c, 0x13f9,
    0x13fa, 0x43d2, 0x006f, 0x006e, 0x003b, 0x43a5, 0x0069, 0x006e, 0x0067, 0x003b, 0x416e, 0x0063,
    0x0072, 0x003b, 0xc000, 0xd835, 0xdcb0, 0x0069, 0x006c, 0x0064, 0x0065, 0x003b, 0x4168, 0x006d,
    0x006c, 0x803b, 0x00dc, 0x40dc, 0x0480, 0x0044, 0x0062, 0x0063, 0x0064, 0x0065, 0x0066, 0x006f,
    0x0073, 0x0076, 0x1427, 0x142c, 0x1430, 0x1433, 0x143e, 0x1485, 0x148a, 0x1490, 0x1496, 0x0061,
    0x0073, 0x0068, 0x003b, 0x62ab, 0x0061, 0x0072, 0x003b, 0x6aeb, 0x0079, 0x003b, 0x4412, 0x0061,
    0x0073, 0x0068, 0x0100, 0x003b, 0x006c, 0x143b, 0x143c, 0x62a9, 0x003b, 0x6ae6, 0x0100, 0x0065,
    0x0072, 0x1443, 0x1445, 0x003b, 0x62c1, 0x0180, 0x0062, 0x0074, 0x0079, 0x144c, 0x1450, 0x147a,
    0x0061, 0x0072, 0x003b, 0x6016, 0x0100, 0x003b, 0x0069, 0x144f, 0x1455, 0x0063, 0x0061, 0x006c,
    0x0200, 0x0042, 0x004c, 0x0053, 0x0054, 0x1461, 0x1465, 0x146a, 0x1474, 0x0061, 0x0072, 0x003b,
    0x6223, 0x0069, 0x006e, 0x0065, 0x003b, 0x407c, 0x0065, 0x0070, 0x0061, 0x0072, 0x0061, 0x0074,
    0x006f, 0x0072, 0x003b, 0x6758, 0x0069, 0x006c, 0x0064, 0x0065, 0x003b, 0x6240, 0x0054, 0x0068,
    0x0069, 0x006e, 0x0053, 0x0070, 0x0061, 0x0063, 0x0065, 0x003b, 0x600a, 0x0072, 0x003b, 0xc000,
    0xd835, 0xdd19, 0x0070, 0x0066, 0x003b, 0xc000, 0xd835, 0xdd4d, 0x0063, 0x0072, 0x003b, 0xc000,
    0xd835, 0xdcb1, 0x0064, 0x0061, 0x0073, 0x0068, 0x003b, 0x62aa, 0x0280, 0x0063, 0x0065, 0x0066,
    0x006f, 0x0073, 0x14a7, 0x14ac, 0x14b1, 0x14b6, 0x14bc, 0x0069, 0x0072, 0x0063, 0x003b, 0x4174,
    0x0064, 0x0067, 0x0065, 0x003b, 0x62c0, 0x0072, 0x003b, 0xc000, 0xd835, 0xdd1a, 0x0070, 0x0066,
    0x003b, 0xc000, 0xd835, 0xdd4e, 0x0063, 0x0072, 0x003b, 0xc000, 0xd835, 0xdcb2, 0x0200, 0x0066,
    0x0069, 0x006f, 0x0073, 0x14cb, 0x14d0, 0x14d2, 0x14d8, 0x0072, 0x003b, 0xc000, 0xd835, 0xdd1b,
    0x003b, 0x439e, 0x0070, 0x0066, 0x003b, 0xc000, 0xd835, 0xdd4f, 0x0063, 0x0072, 0x003b, 0xc000,
    0xd835, 0xdcb3, 0x0480, 0x0041, 0x0049, 0x0055, 0x0061, 0x0063, 0x0066, 0x006f, 0x0073, 0x0075,
    0x14f1, 0x14f5, 0x14f9, 0x14fd, 0x1504, 0x150f, 0x1514, 0x151a, 0x1520, 0x0063, 0x0079, 0x003b,
    0x442f, 0x0063, 0x0079, 0x003b, 0x4407, 0x0063, 0x0079, 0x003b, 0x442e, 0x0063, 0x0075, 0x0074,
    0x0065, 0x803b, 0x00dd, 0x40dd, 0x0100, 0x0069, 0x0079, 0x1509, 0x150d, 0x0072, 0x0063, 0x003b,
    0x4176, 0x003b, 0x442b, 0x0072, 0x003b, 0xc000, 0xd835, 0xdd1c, 0x0070, 0x0066, 0x003b, 0xc000,
    0xd835, 0xdd50, 0x0063, 0x0072, 0x003b, 0xc000, 0xd835, 0xdcb4, 0x006d, 0x006c, 0x003b, 0x4178,
    0x0400, 0x0048, 0x0061, 0x0063, 0x0064, 0x0065, 0x0066, 0x006f, 0x0073, 0x1535, 0x1539, 0x153f,
    0x154b, 0x154f, 0x155d, 0x1560, 0x1564, 0x0063, 0x0079, 0x003b, 0x4416, 0x0063, 0x0075, 0x0074,
    0x0065, 0x003b, 0x4179, 0x0100, 0x0061, 0x0079, 0x1544, 0x1549, 0x0072, 0x006f, 0x006e, 0x003b,
    0x417d, 0x003b, 0x4417, 0x006f, 0x0074, 0x003b, 0x417b, 0x01f2, 0x1554, 0x0000, 0x155b, 0x006f,
    0x0057, 0x0069, 0x0064, 0x0074, 0x00e8, 0x0ad9, 0x0061, 0x003b, 0x4396, 0x0072, 0x003b, 0x6128,
    0x0070, 0x0066, 0x003b, 0x6124, 0x0063, 0x0072, 0x003b, 0xc000, 0xd835, 0xdcb5, 0x0be1, 0x1583,
    0x158a, 0x1590, 0x0000, 0x15b0, 0x15b6, 0x15bf, 0x0000, 0x0000, 0x0000, 0x0000, 0x15c6, 0x15db,
    0x15eb, 0x165f, 0x166d, 0x0000, 0x1695, 0x169b, 0x16b2, 0x16b9, 0x0000, 0x16be, 0x0063, 0x0075,
    0x0074, 0x0065, 0x803b, 0x00e1, 0x40e1, 0x0072, 0x0065, 0x0076, 0x0065, 0x003b, 0x4103, 0x0300,
    0x003b, 0x0045, 0x0064, 0x0069, 0x0075, 0x0079, 0x159c, 0x159d, 0x15a1, 0x15a3, 0x15a8, 0x15ad,
    0x623e, 0x003b, 0xc000, 0x223e, 0x0333, 0x003b, 0x623f, 0x0072, 0x0063, 0x803b, 0x00e2, 0x40e2,
    0x0074, 0x0065, 0x80bb, 0x00b4, 0x0306, 0x003b, 0x4430, 0x006c, 0x0069, 0x0067, 0x803b, 0x00e6,
    0x40e6, 0x0100, 0x003b, 0x0072, 0x00b2, 0x15ba, 0x003b, 0xc000, 0xd835, 0xdd1e, 0x0072, 0x0061,
    0x0076, 0x0065, 0x803b, 0x00e0, 0x40e0, 0x0100, 0x0065, 0x0070, 0x15ca, 0x15d6, 0x0100, 0x0066,
    0x0070, 0x15cf, 0x15d4, 0x0073, 0x0079, 0x006d, 0x003b, 0x6135, 0x00e8, 0x15d3, 0x0068, 0x0061,
    0x003b, 0x43b1, 0x0100, 0x0061, 0x0070, 0x15df, 0x0063, 0x0100, 0x0063, 0x006c, 0x15e4, 0x15e7,
    0x0072, 0x003b, 0x4101, 0x0067, 0x003b, 0x6a3f, 0x0264, 0x15f0, 0x0000, 0x0000, 0x160a, 0x0280,
    0x003b, 0x0061, 0x0064, 0x0073, 0x0076, 0x15fa, 0x15fb, 0x15ff, 0x1601, 0x1607, 0x6227, 0x006e,
    0x0064, 0x003b, 0x6a55, 0x003b, 0x6a5c, 0x006c, 0x006f, 0x0070, 0x0065, 0x003b, 0x6a58, 0x003b,
    0x6a5a, 0x0380, 0x003b, 0x0065, 0x006c, 0x006d, 0x0072, 0x0073, 0x007a, 0x1618, 0x1619, 0x161b,
    0x161e, 0x163f, 0x164f, 0x1659, 0x6220, 0x003b, 0x69a4, 0x0065, 0x00bb, 0x1619, 0x0073, 0x0064,
    0x0100, 0x003b, 0x0061, 0x1625, 0x1626, 0x6221, 0x0461, 0x1630, 0x1632, 0x1634, 0x1636, 0x1638,
    0x163a, 0x163c, 0x163e, 0x003b, 0x69a8, 0x003b, 0x69a9, 0x003b, 0x69aa, 0x003b, 0x69ab, 0x003b,
    0x69ac, 0x003b, 0x69ad, 0x003b, 0x69ae, 0x003b, 0x69af, 0x0074, 0x0100, 0x003b, 0x0076, 0x1645,
    0x1646, 0x621f, 0x0062, 0x0100, 0x003b, 0x0064, 0x164c, 0x164d, 0x62be, 0x003b, 0x699d, 0x0100,
    0x0070, 0x0074, 0x1654, 0x1657, 0x0068, 0x003b, 0x6222, 0x00bb, 0x00b9, 0x0061, 0x0072, 0x0072,
    0x003b, 0x637c, 0x0100, 0x0067, 0x0070, 0x1663, 0x1667, 0x006f, 0x006e, 0x003b, 0x4105, 0x0066,
    0x003b, 0xc000, 0xd835, 0xdd52, 0x0380, 0x003b, 0x0045, 0x0061, 0x0065, 0x0069, 0x006f, 0x0070,
    0x12c1, 0x167b, 0x167d, 0x1682, 0x1684, 0x1687, 0x168a, 0x003b, 0x6a70, 0x0063, 0x0069, 0x0072,
    0x003b, 0x6a6f, 0x003b, 0x624a, 0x0064, 0x003b, 0x624b, 0x0073, 0x003b, 0x4027, 0x0072, 0x006f,
    0x0078, 0x0100, 0x003b, 0x0065, 0x12c1, 0x1692, 0x00f1, 0x1683, 0x0069, 0x006e, 0x0067, 0x803b,
    0x00e5, 0x40e5, 0x0180, 0x0063, 0x0074, 0x0079, 0x16a1, 0x16a6, 0x16a8, 0x0072, 0x003b, 0xc000,
    0xd835, 0xdcb6, 0x003b, 0x402a, 0x006d, 0x0070, 0x0100, 0x003b, 0x0065, 0x12c1, 0x16af, 0x00f1,
    0x0288, 0x0069, 0x006c, 0x0064, 0x0065, 0x803b, 0x00e3, 0x40e3, 0x006d, 0x006c, 0x803b, 0x00e4,
    0x40e4, 0x0100, 0x0063, 0x0069, 0x16c2, 0x16c8, 0x006f, 0x006e, 0x0069, 0x006e, 0x00f4, 0x0272,
    0x006e, 0x0074, 0x003b, 0x6a11, 0x0800, 0x004e, 0x0061, 0x0062, 0x0063, 0x0064, 0x0065, 0x0066,
    0x0069, 0x006b, 0x006c, 0x006e, 0x006f, 0x0070, 0x0072, 0x0073, 0x0075, 0x16ed, 0x16f1, 0x1730,
    0x173c, 0x1743, 0x1748, 0x1778, 0x177d, 0x17e0, 0x17e6, 0x1839, 0x1850, 0x170d, 0x193d, 0x1948,
    0x1970, 0x006f, 0x0074, 0x003b, 0x6aed, 0x0100, 0x0063, 0x0072, 0x16f6, 0x171e, 0x006b, 0x0200,
    0x0063, 0x0065, 0x0070, 0x0073, 0x1700, 0x1705, 0x170d, 0x1713, 0x006f, 0x006e, 0x0067, 0x003b,
    0x624c, 0x0070, 0x0073, 0x0069, 0x006c, 0x006f, 0x006e, 0x003b, 0x43f6, 0x0072, 0x0069, 0x006d,
    0x0065, 0x003b, 0x6035, 0x0069, 0x006d, 0x0100, 0x003b, 0x0065, 0x171a, 0x171b, 0x623d, 0x0071,
    0x003b, 0x62cd, 0x0176, 0x1722, 0x1726, 0x0065, 0x0065, 0x003b, 0x62bd, 0x0065, 0x0064, 0x0100,
    0x003b, 0x0067, 0x172c, 0x172d, 0x6305, 0x0065, 0x00bb, 0x172d, 0x0072, 0x006b, 0x0100, 0x003b,
    0x0074, 0x135c, 0x1737, 0x0062, 0x0072, 0x006b, 0x003b, 0x63b6, 0x0100, 0x006f, 0x0079, 0x1701,
    0x1741, 0x003b, 0x4431, 0x0071, 0x0075, 0x006f, 0x003b, 0x601e, 0x0280, 0x0063, 0x006d, 0x0070,
    0x0072, 0x0074, 0x1753, 0x175b, 0x1761, 0x1764, 0x1768, 0x0061, 0x0075, 0x0073, 0x0100, 0x003b,
    0x0065, 0x010a, 0x0109, 0x0070, 0x0074, 0x0079, 0x0076, 0x003b, 0x69b0, 0x0073, 0x00e9, 0x170c,
    0x006e, 0x006f, 0x00f5, 0x0113, 0x0180, 0x0061, 0x0068, 0x0077, 0x176f, 0x1771, 0x1773, 0x003b,
    0x43b2, 0x003b, 0x6136, 0x0065, 0x0065, 0x006e, 0x003b, 0x626c, 0x0072, 0x003b, 0xc000, 0xd835,
    0xdd1f, 0x0067, 0x0380, 0x0063, 0x006f, 0x0073, 0x0074, 0x0075, 0x0076, 0x0077, 0x178d, 0x179d,
    0x17b3, 0x17c1, 0x17d5, 0x17db, 0x17de, 0x0180, 0x0061, 0x0069, 0x0075, 0x1794, 0x1796, 0x179a,
    0x00f0, 0x0760, 0x0072, 0x0063, 0x003b, 0x65ef, 0x0070, 0x00bb, 0x1371, 0x0180, 0x0064, 0x0070,
    0x0074, 0x17a4, 0x17a8, 0x17ad, 0x006f, 0x0074, 0x003b, 0x6a00, 0x006c, 0x0075, 0x0073, 0x003b,
    0x6a01, 0x0069, 0x006d, 0x0065, 0x0073, 0x003b, 0x6a02, 0x0271, 0x17b9, 0x0000, 0x0000, 0x17be,
    0x0063, 0x0075, 0x0070, 0x003b, 0x6a06, 0x0061, 0x0072, 0x003b, 0x6605, 0x0072, 0x0069, 0x0061,
    0x006e, 0x0067, 0x006c, 0x0065, 0x0100, 0x0064, 0x0075, 0x17cd, 0x17d2, 0x006f, 0x0077, 0x006e,
    0x003b, 0x65bd, 0x0070, 0x003b, 0x65b3, 0x0070, 0x006c, 0x0075, 0x0073, 0x003b, 0x6a04, 0x0065,
    0x00e5, 0x1444, 0x00e5, 0x14ad, 0x0061, 0x0072, 0x006f, 0x0077, 0x003b, 0x690d, 0x0180, 0x0061,
    0x006b, 0x006f, 0x17ed, 0x1826, 0x1835, 0x0100, 0x0063, 0x006e, 0x17f2, 0x1823, 0x006b, 0x0180,
    0x006c, 0x0073, 0x0074, 0x17fa, 0x05ab, 0x1802, 0x006f, 0x007a, 0x0065, 0x006e, 0x0067, 0x0065,
    0x003b, 0x69eb, 0x0072, 0x0069, 0x0061, 0x006e, 0x0067, 0x006c, 0x0065, 0x0200, 0x003b, 0x0064,
    0x006c, 0x0072, 0x1812, 0x1813, 0x1818, 0x181d, 0x65b4, 0x006f, 0x0077, 0x006e, 0x003b, 0x65be,
    0x0065, 0x0066, 0x0074, 0x003b, 0x65c2, 0x0069, 0x0067, 0x0068, 0x0074, 0x003b, 0x65b8, 0x006b,
    0x003b, 0x6423, 0x01b1, 0x182b, 0x0000, 0x1833, 0x01b2, 0x182f, 0x0000, 0x1831, 0x003b, 0x6592,
    0x003b, 0x6591, 0x0034, 0x003b, 0x6593, 0x0063, 0x006b, 0x003b, 0x6588, 0x0100, 0x0065, 0x006f,
    0x183e, 0x184d, 0x0100, 0x003b, 0x0071, 0x1843, 0x1846, 0xc000, 0x003d, 0x20e5, 0x0075, 0x0069,
    0x0076, 0x003b, 0xc000, 0x2261, 0x20e5, 0x0074, 0x003b, 0x6310, 0x0200, 0x0070, 0x0074, 0x0077,
    0x0078, 0x1859, 0x185e, 0x1867, 0x186c, 0x0066, 0x003b, 0xc000, 0xd835, 0xdd53, 0x0100, 0x003b,
    0x0074, 0x13cb, 0x1863, 0x006f, 0x006d, 0x00bb, 0x13cc, 0x0074, 0x0069, 0x0065, 0x003b, 0x62c8,
    0x0600, 0x0044, 0x0048, 0x0055, 0x0056, 0x0062, 0x0064, 0x0068, 0x006d, 0x0070, 0x0074, 0x0075,
    0x0076, 0x1885, 0x1896, 0x18aa, 0x18bb, 0x18d7, 0x18db, 0x18ec, 0x18ff, 0x1905, 0x190a, 0x1910,
    0x1921, 0x0200, 0x004c, 0x0052, 0x006c, 0x0072, 0x188e, 0x1890, 0x1892, 0x1894, 0x003b, 0x6557,
    0x003b, 0x6554, 0x003b, 0x6556, 0x003b, 0x6553, 0x0280, 0x003b, 0x0044, 0x0055, 0x0064, 0x0075,
    0x18a1, 0x18a2, 0x18a4, 0x18a6, 0x18a8, 0x6550, 0x003b, 0x6566, 0x003b, 0x6569, 0x003b, 0x6564,
    0x003b, 0x6567, 0x0200, 0x004c, 0x0052, 0x006c, 0x0072, 0x18b3, 0x18b5, 0x18b7, 0x18b9, 0x003b,
    0x655d, 0x003b, 0x655a, 0x003b, 0x655c, 0x003b, 0x6559, 0x0380, 0x003b, 0x0048, 0x004c, 0x0052,
    0x0068, 0x006c, 0x0072, 0x18ca, 0x18cb, 0x18cd, 0x18cf, 0x18d1, 0x18d3, 0x18d5, 0x6551, 0x003b,
    0x656c, 0x003b, 0x6563, 0x003b, 0x6560, 0x003b, 0x656b, 0x003b, 0x6562, 0x003b, 0x655f, 0x006f,
    0x0078, 0x003b, 0x69c9, 0x0200, 0x004c, 0x0052, 0x006c, 0x0072, 0x18e4, 0x18e6, 0x18e8, 0x18ea,
    0x003b, 0x6555, 0x003b, 0x6552, 0x003b, 0x6510, 0x003b, 0x650c, 0x0280, 0x003b, 0x0044, 0x0055,
    0x0064, 0x0075, 0x06bd, 0x18f7, 0x18f9, 0x18fb, 0x18fd, 0x003b, 0x6565, 0x003b, 0x6568, 0x003b,
    0x652c, 0x003b, 0x6534, 0x0069, 0x006e, 0x0075, 0x0073, 0x003b, 0x629f, 0x006c, 0x0075, 0x0073,
    0x003b, 0x629e, 0x0069, 0x006d, 0x0065, 0x0073, 0x003b, 0x62a0, 0x0200, 0x004c, 0x0052, 0x006c,
    0x0072, 0x1919, 0x191b, 0x191d, 0x191f, 0x003b, 0x655b, 0x003b, 0x6558, 0x003b, 0x6518, 0x003b,
    0x6514, 0x0380, 0x003b, 0x0048, 0x004c, 0x0052, 0x0068, 0x006c, 0x0072, 0x1930, 0x1931, 0x1933,
    0x1935, 0x1937, 0x1939, 0x193b, 0x6502, 0x003b, 0x656a, 0x003b, 0x6561, 0x003b, 0x655e, 0x003b,
    0x653c, 0x003b, 0x6524, 0x003b, 0x651c, 0x0100, 0x0065, 0x0076, 0x0123, 0x1942, 0x0062, 0x0061,
    0x0072, 0x803b, 0x00a6, 0x40a6, 0x0200, 0x0063, 0x0065, 0x0069, 0x006f, 0x1951, 0x1956, 0x195a,
    0x1960, 0x0072, 0x003b, 0xc000, 0xd835, 0xdcb7, 0x006d, 0x0069, 0x003b, 0x604f, 0x006d, 0x0100,
    0x003b, 0x0065, 0x171a, 0x171c, 0x006c, 0x0180, 0x003b, 0x0062, 0x0068, 0x1968, 0x1969, 0x196b,
    0x405c, 0x003b, 0x69c5, 0x0073, 0x0075, 0x0062, 0x003b, 0x67c8, 0x016c, 0x1974, 0x197e, 0x006c,
    0x0100, 0x003b, 0x0065, 0x1979, 0x197a, 0x6022, 0x0074, 0x00bb, 0x197a, 0x0070, 0x0180, 0x003b,
    0x0045, 0x0065, 0x012f, 0x1985, 0x1987, 0x003b, 0x6aae, 0x0100, 0x003b, 0x0071, 0x06dc, 0x06db,
    0x0ce1, 0x19a7, 0x0000, 0x19e8, 0x1a11, 0x1a15, 0x1a32, 0x0000, 0x1a37, 0x1a50, 0x0000, 0x0000,
    0x1ab4, 0x0000, 0x0000, 0x1ac1, 0x0000, 0x0000, 0x1b21, 0x1b2e, 0x1b4d, 0x1b52, 0x0000, 0x1bfd,
    0x0000, 0x1c0c, 0x0180, 0x0063, 0x0070, 0x0072, 0x19ad, 0x19b2, 0x19dd, 0x0075, 0x0074, 0x0065,
    0x003b, 0x4107, 0x0300, 0x003b, 0x0061, 0x0062, 0x0063, 0x0064, 0x0073, 0x19bf, 0x19c0, 0x19c4,
    0x19ca, 0x19d5, 0x19d9, 0x6229, 0x006e, 0x0064, 0x003b, 0x6a44, 0x0072, 0x0063, 0x0075, 0x0070,
    0x003b, 0x6a49, 0x0100, 0x0061, 0x0075, 0x19cf, 0x19d2, 0x0070, 0x003b, 0x6a4b, 0x0070, 0x003b,
    0x6a47, 0x006f, 0x0074, 0x003b, 0x6a40, 0x003b, 0xc000, 0x2229, 0xfe00, 0x0100, 0x0065, 0x006f,
    0x19e2, 0x19e5, 0x0074, 0x003b, 0x6041, 0x00ee, 0x0693, 0x0200, 0x0061, 0x0065, 0x0069, 0x0075,
    0x19f0, 0x19fb, 0x1a01, 0x1a05, 0x01f0, 0x19f5, 0x0000, 0x19f8, 0x0073, 0x003b, 0x6a4d, 0x006f,
    0x006e, 0x003b, 0x410d, 0x0064, 0x0069, 0x006c, 0x803b, 0x00e7, 0x40e7, 0x0072, 0x0063, 0x003b,
    0x4109, 0x0070, 0x0073, 0x0100, 0x003b, 0x0073, 0x1a0c, 0x1a0d, 0x6a4c, 0x006d, 0x003b, 0x6a50,
    0x006f, 0x0074, 0x003b, 0x410b, 0x0180, 0x0064, 0x006d, 0x006e, 0x1a1b, 0x1a20, 0x1a26, 0x0069,
    0x006c, 0x80bb, 0x00b8, 0x01ad, 0x0070, 0x0074, 0x0079, 0x0076, 0x003b, 0x69b2, 0x0074, 0x8100,
    0x00a2, 0x003b, 0x0065, 0x1a2d, 0x1a2e, 0x40a2, 0x0072, 0x00e4, 0x01b2, 0x0072, 0x003b, 0xc000,
    0xd835, 0xdd20, 0x0180, 0x0063, 0x0065, 0x0069, 0x1a3d, 0x1a40, 0x1a4d, 0x0079, 0x003b, 0x4447,
    0x0063, 0x006b, 0x0100, 0x003b, 0x006d, 0x1a47, 0x1a48, 0x6713, 0x0061, 0x0072, 0x006b, 0x00bb,
    0x1a48, 0x003b, 0x43c7, 0x0072, 0x0380, 0x003b, 0x0045, 0x0063, 0x0065, 0x0066, 0x006d, 0x0073,
    0x1a5f, 0x1a60, 0x1a62, 0x1a6b, 0x1aa4, 0x1aaa, 0x1aae, 0x65cb, 0x003b, 0x69c3, 0x0180, 0x003b,
    0x0065, 0x006c, 0x1a69, 0x1a6a, 0x1a6d, 0x42c6, 0x0071, 0x003b, 0x6257, 0x0065, 0x0261, 0x1a74,
    0x0000, 0x0000, 0x1a88, 0x0072, 0x0072, 0x006f, 0x0077, 0x0100, 0x006c, 0x0072, 0x1a7c, 0x1a81,
    0x0065, 0x0066, 0x0074, 0x003b, 0x61ba, 0x0069, 0x0067, 0x0068, 0x0074, 0x003b, 0x61bb, 0x0280,
    0x0052, 0x0053, 0x0061, 0x0063, 0x0064, 0x1a92, 0x1a94, 0x1a96, 0x1a9a, 0x1a9f, 0x00bb, 0x0f47,
    0x003b, 0x64c8, 0x0073, 0x0074, 0x003b, 0x629b, 0x0069, 0x0072, 0x0063, 0x003b, 0x629a, 0x0061,
    0x0073, 0x0068, 0x003b, 0x629d, 0x006e, 0x0069, 0x006e, 0x0074, 0x003b, 0x6a10, 0x0069, 0x0064,
    0x003b, 0x6aef, 0x0063, 0x0069, 0x0072, 0x003b, 0x69c2, 0x0075, 0x0062, 0x0073, 0x0100, 0x003b,
    0x0075, 0x1abb, 0x1abc, 0x6663, 0x0069, 0x0074, 0x00bb, 0x1abc, 0x02ec, 0x1ac7, 0x1ad4, 0x1afa,
    0x0000, 0x1b0a, 0x006f, 0x006e, 0x0100, 0x003b, 0x0065, 0x1acd, 0x1ace, 0x403a, 0x0100, 0x003b,
    0x0071, 0x00c7, 0x00c6, 0x026d, 0x1ad9, 0x0000, 0x0000, 0x1ae2, 0x0061, 0x0100, 0x003b, 0x0074,
    0x1ade, 0x1adf, 0x402c, 0x003b, 0x4040, 0x0180, 0x003b, 0x0066, 0x006c, 0x1ae8, 0x1ae9, 0x1aeb,
    0x6201, 0x00ee, 0x1160, 0x0065, 0x0100, 0x006d, 0x0078, 0x1af1, 0x1af6, 0x0065, 0x006e, 0x0074,
    0x00bb, 0x1ae9, 0x0065, 0x00f3, 0x024d, 0x01e7, 0x1afe, 0x0000, 0x1b07, 0x0100, 0x003b, 0x0064,
    0x12bb, 0x1b02, 0x006f, 0x0074, 0x003b, 0x6a6d, 0x006e, 0x00f4, 0x0246, 0x0180, 0x0066, 0x0072,
    0x0079, 0x1b10, 0x1b14, 0x1b17, 0x003b, 0xc000, 0xd835, 0xdd54, 0x006f, 0x00e4, 0x0254, 0x8100,
    0x00a9, 0x003b, 0x0073, 0x0155, 0x1b1d, 0x0072, 0x003b, 0x6117, 0x0100, 0x0061, 0x006f, 0x1b25,
    0x1b29, 0x0072, 0x0072, 0x003b, 0x61b5, 0x0073, 0x0073, 0x003b, 0x6717, 0x0100, 0x0063, 0x0075,
    0x1b32, 0x1b37, 0x0072, 0x003b, 0xc000, 0xd835, 0xdcb8, 0x0100, 0x0062, 0x0070, 0x1b3c, 0x1b44,
    0x0100, 0x003b, 0x0065, 0x1b41, 0x1b42, 0x6acf, 0x003b, 0x6ad1, 0x0100, 0x003b, 0x0065, 0x1b49,
    0x1b4a, 0x6ad0, 0x003b, 0x6ad2, 0x0064, 0x006f, 0x0074, 0x003b, 0x62ef, 0x0380, 0x0064, 0x0065,
    0x006c, 0x0070, 0x0072, 0x0076, 0x0077, 0x1b60, 0x1b6c, 0x1b77, 0x1b82, 0x1bac, 0x1bd4, 0x1bf9,
    0x0061, 0x0072, 0x0072, 0x0100, 0x006c, 0x0072, 0x1b68, 0x1b6a, 0x003b, 0x6938, 0x003b, 0x6935,
    0x0270, 0x1b72, 0x0000, 0x0000, 0x1b75, 0x0072, 0x003b, 0x62de, 0x0063, 0x003b, 0x62df, 0x0061,
    0x0072, 0x0072, 0x0100, 0x003b, 0x0070, 0x1b7f, 0x1b80, 0x61b6, 0x003b, 0x693d, 0x0300, 0x003b,
    0x0062, 0x0063, 0x0064, 0x006f, 0x0073, 0x1b8f, 0x1b90, 0x1b96, 0x1ba1, 0x1ba5, 0x1ba8, 0x622a,
    0x0072, 0x0063, 0x0061, 0x0070, 0x003b, 0x6a48, 0x0100, 0x0061, 0x0075, 0x1b9b, 0x1b9e, 0x0070,
    0x003b, 0x6a46, 0x0070, 0x003b, 0x6a4a, 0x006f, 0x0074, 0x003b, 0x628d, 0x0072, 0x003b, 0x6a45,
    0x003b, 0xc000, 0x222a, 0xfe00, 0x0200, 0x0061, 0x006c, 0x0072, 0x0076, 0x1bb5, 0x1bbf, 0x1bde,
    0x1be3, 0x0072, 0x0072, 0x0100, 0x003b, 0x006d, 0x1bbc, 0x1bbd, 0x61b7, 0x003b, 0x693c, 0x0079,
    0x0180, 0x0065, 0x0076, 0x0077, 0x1bc7, 0x1bd4, 0x1bd8, 0x0071, 0x0270, 0x1bce, 0x0000, 0x0000,
    0x1bd2, 0x0072, 0x0065, 0x00e3, 0x1b73, 0x0075, 0x00e3, 0x1b75, 0x0065, 0x0065, 0x003b, 0x62ce,
    0x0065, 0x0064, 0x0067, 0x0065, 0x003b, 0x62cf, 0x0065, 0x006e, 0x803b, 0x00a4, 0x40a4, 0x0065,
    0x0061, 0x0072, 0x0072, 0x006f, 0x0077, 0x0100, 0x006c, 0x0072, 0x1bee, 0x1bf3, 0x0065, 0x0066,
    0x0074, 0x00bb, 0x1b80, 0x0069, 0x0067, 0x0068, 0x0074, 0x00bb, 0x1bbd, 0x0065, 0x00e4, 0x1bdd,
    0x0100, 0x0063, 0x0069, 0x1c01, 0x1c07, 0x006f, 0x006e, 0x0069, 0x006e, 0x00f4, 0x01f7, 0x006e,
    0x0074, 0x003b, 0x6231, 0x006c, 0x0063, 0x0074, 0x0079, 0x003b, 0x632d, 0x0980, 0x0041, 0x0048,
    0x0061, 0x0062, 0x0063, 0x0064, 0x0065, 0x0066, 0x0068, 0x0069, 0x006a, 0x006c, 0x006f, 0x0072,
    0x0073, 0x0074, 0x0075, 0x0077, 0x007a, 0x1c38, 0x1c3b, 0x1c3f, 0x1c5d, 0x1c69, 0x1c75, 0x1c8a,
    0x1c9e, 0x1cac, 0x1cb7, 0x1cfb, 0x1cff, 0x1d0d, 0x1d7b, 0x1d91, 0x1dab, 0x1dbb, 0x1dc6, 0x1dcd,
    0x0072, 0x00f2, 0x0381, 0x0061, 0x0072, 0x003b, 0x6965, 0x0200, 0x0067, 0x006c, 0x0072, 0x0073,
    0x1c48, 0x1c4d, 0x1c52, 0x1c54, 0x0067, 0x0065, 0x0072, 0x003b, 0x6020, 0x0065, 0x0074, 0x0068,
    0x003b, 0x6138, 0x00f2, 0x1133, 0x0068, 0x0100, 0x003b, 0x0076, 0x1c5a, 0x1c5b, 0x6010, 0x00bb,
    0x090a, 0x016b, 0x1c61, 0x1c67, 0x0061, 0x0072, 0x006f, 0x0077, 0x003b, 0x690f, 0x0061, 0x00e3,
    0x0315, 0x0100, 0x0061, 0x0079, 0x1c6e, 0x1c73, 0x0072, 0x006f, 0x006e, 0x003b, 0x410f, 0x003b,
    0x4434, 0x0180, 0x003b, 0x0061, 0x006f, 0x0332, 0x1c7c, 0x1c84, 0x0100, 0x0067, 0x0072, 0x02bf,
    0x1c81, 0x0072, 0x003b, 0x61ca, 0x0074, 0x0073, 0x0065, 0x0071, 0x003b, 0x6a77, 0x0180, 0x0067,
    0x006c, 0x006d, 0x1c91, 0x1c94, 0x1c98, 0x803b, 0x00b0, 0x40b0, 0x0074, 0x0061, 0x003b, 0x43b4,
    0x0070, 0x0074, 0x0079, 0x0076, 0x003b, 0x69b1, 0x0100, 0x0069, 0x0072, 0x1ca3, 0x1ca8, 0x0073,
    0x0068, 0x0074, 0x003b, 0x697f, 0x003b, 0xc000, 0xd835, 0xdd21, 0x0061, 0x0072, 0x0100, 0x006c,
    0x0072, 0x1cb3, 0x1cb5, 0x00bb, 0x08dc, 0x00bb, 0x101e, 0x0280, 0x0061, 0x0065, 0x0067, 0x0073,
    0x0076, 0x1cc2, 0x0378, 0x1cd6, 0x1cdc, 0x1ce0, 0x006d, 0x0180, 0x003b, 0x006f, 0x0073, 0x0326,
    0x1cca, 0x1cd4, 0x006e, 0x0064, 0x0100, 0x003b, 0x0073, 0x0326, 0x1cd1, 0x0075, 0x0069, 0x0074,
    0x003b, 0x6666, 0x0061, 0x006d, 0x006d, 0x0061, 0x003b, 0x43dd, 0x0069, 0x006e, 0x003b, 0x62f2,
    0x0180, 0x003b, 0x0069, 0x006f, 0x1ce7, 0x1ce8, 0x1cf8, 0x40f7, 0x0064, 0x0065, 0x8100, 0x00f7,
    0x003b, 0x006f, 0x1ce7, 0x1cf0, 0x006e, 0x0074, 0x0069, 0x006d, 0x0065, 0x0073, 0x003b, 0x62c7,
    0x006e, 0x00f8, 0x1cf7, 0x0063, 0x0079, 0x003b, 0x4452, 0x0063, 0x026f, 0x1d06, 0x0000, 0x0000,
    0x1d0a, 0x0072, 0x006e, 0x003b, 0x631e, 0x006f, 0x0070, 0x003b, 0x630d, 0x0280, 0x006c, 0x0070,
    0x0074, 0x0075, 0x0077, 0x1d18, 0x1d1d, 0x1d22, 0x1d49, 0x1d55, 0x006c, 0x0061, 0x0072, 0x003b,
    0x4024, 0x0066, 0x003b, 0xc000, 0xd835, 0xdd55, 0x0280, 0x003b, 0x0065, 0x006d, 0x0070, 0x0073,
    0x030b, 0x1d2d, 0x1d37, 0x1d3d, 0x1d42, 0x0071, 0x0100, 0x003b, 0x0064, 0x0352, 0x1d33, 0x006f,
    0x0074, 0x003b, 0x6251, 0x0069, 0x006e, 0x0075, 0x0073, 0x003b, 0x6238, 0x006c, 0x0075, 0x0073,
    0x003b, 0x6214, 0x0071, 0x0075, 0x0061, 0x0072, 0x0065, 0x003b, 0x62a1, 0x0062, 0x006c, 0x0065,
    0x0062, 0x0061, 0x0072, 0x0077, 0x0065, 0x0064, 0x0067, 0x00e5, 0x00fa, 0x006e, 0x0180, 0x0061,
    0x0064, 0x0068, 0x112e, 0x1d5d, 0x1d67, 0x006f, 0x0077, 0x006e, 0x0061, 0x0072, 0x0072, 0x006f,
    0x0077, 0x00f3, 0x1c83, 0x0061, 0x0072, 0x0070, 0x006f, 0x006f, 0x006e, 0x0100, 0x006c, 0x0072,
    0x1d72, 0x1d76, 0x0065, 0x0066, 0x00f4, 0x1cb4, 0x0069, 0x0067, 0x0068, 0x00f4, 0x1cb6, 0x0162,
    0x1d7f, 0x1d85, 0x006b, 0x0061, 0x0072, 0x006f, 0x00f7, 0x0f42, 0x026f, 0x1d8a, 0x0000, 0x0000,
    0x1d8e, 0x0072, 0x006e, 0x003b, 0x631f, 0x006f, 0x0070, 0x003b, 0x630c, 0x0180, 0x0063, 0x006f,
    0x0074, 0x1d98, 0x1da3, 0x1da6, 0x0100, 0x0072, 0x0079, 0x1d9d, 0x1da1, 0x003b, 0xc000, 0xd835,
    0xdcb9, 0x003b, 0x4455, 0x006c, 0x003b, 0x69f6, 0x0072, 0x006f, 0x006b, 0x003b, 0x4111, 0x0100,
    0x0064, 0x0072, 0x1db0, 0x1db4, 0x006f, 0x0074, 0x003b, 0x62f1, 0x0069, 0x0100, 0x003b, 0x0066,
    0x1dba, 0x1816, 0x65bf, 0x0100, 0x0061, 0x0068, 0x1dc0, 0x1dc3, 0x0072, 0x00f2, 0x0429, 0x0061,
    0x00f2, 0x0fa6, 0x0061, 0x006e, 0x0067, 0x006c, 0x0065, 0x003b, 0x69a6, 0x0100, 0x0063, 0x0069,
    0x1dd2, 0x1dd5, 0x0079, 0x003b, 0x445f, 0x0067, 0x0072, 0x0061, 0x0072, 0x0072, 0x003b, 0x67ff,
    0x0900, 0x0044, 0x0061, 0x0063, 0x0064, 0x0065, 0x0066, 0x0067, 0x006c, 0x006d, 0x006e, 0x006f,
    0x0070, 0x0071, 0x0072, 0x0073, 0x0074, 0x0075, 0x0078, 0x1e01, 0x1e09, 0x1e19, 0x1e38, 0x0578,
    0x1e3c, 0x1e49, 0x1e61, 0x1e7e, 0x1ea5, 0x1eaf, 0x1ebd, 0x1ee1, 0x1f2a, 0x1f37, 0x1f44, 0x1f4e,
    0x1f5a, 0x0100, 0x0044, 0x006f, 0x1e06, 0x1d34, 0x006f, 0x00f4, 0x1c89, 0x0100, 0x0063, 0x0073,
    0x1e0e, 0x1e14, 0x0075, 0x0074, 0x0065, 0x803b, 0x00e9, 0x40e9, 0x0074, 0x0065, 0x0072, 0x003b,
    0x6a6e, 0x0200, 0x0061, 0x0069, 0x006f, 0x0079, 0x1e22, 0x1e27, 0x1e31, 0x1e36, 0x0072, 0x006f,
    0x006e, 0x003b, 0x411b, 0x0072, 0x0100, 0x003b, 0x0063, 0x1e2d, 0x1e2e, 0x6256, 0x803b, 0x00ea,
    0x40ea, 0x006c, 0x006f, 0x006e, 0x003b, 0x6255, 0x003b, 0x444d, 0x006f, 0x0074, 0x003b, 0x4117,
    0x0100, 0x0044, 0x0072, 0x1e41, 0x1e45, 0x006f, 0x0074, 0x003b, 0x6252, 0x003b, 0xc000, 0xd835,
    0xdd22, 0x0180, 0x003b, 0x0072, 0x0073, 0x1e50, 0x1e51, 0x1e57, 0x6a9a, 0x0061, 0x0076, 0x0065,
    0x803b, 0x00e8, 0x40e8, 0x0100, 0x003b, 0x0064, 0x1e5c, 0x1e5d, 0x6a96, 0x006f, 0x0074, 0x003b,
    0x6a98, 0x0200, 0x003b, 0x0069, 0x006c, 0x0073, 0x1e6a, 0x1e6b, 0x1e72, 0x1e74, 0x6a99, 0x006e,
    0x0074, 0x0065, 0x0072, 0x0073, 0x003b, 0x63e7, 0x003b, 0x6113, 0x0100, 0x003b, 0x0064, 0x1e79,
    0x1e7a, 0x6a95, 0x006f, 0x0074, 0x003b, 0x6a97, 0x0180, 0x0061, 0x0070, 0x0073, 0x1e85, 0x1e89,
    0x1e97, 0x0063, 0x0072, 0x003b, 0x4113, 0x0074, 0x0079, 0x0180, 0x003b, 0x0073, 0x0076, 0x1e92,
    0x1e93, 0x1e95, 0x6205, 0x0065, 0x0074, 0x00bb, 0x1e93, 0x0070, 0x0100, 0x0031, 0x003b, 0x1e9d,
    0x1ea4, 0x0133, 0x1ea1, 0x1ea3, 0x003b, 0x6004, 0x003b, 0x6005, 0x6003, 0x0100, 0x0067, 0x0073,
    0x1eaa, 0x1eac, 0x003b, 0x414b, 0x0070, 0x003b, 0x6002, 0x0100, 0x0067, 0x0070, 0x1eb4, 0x1eb8,
    0x006f, 0x006e, 0x003b, 0x4119, 0x0066, 0x003b, 0xc000, 0xd835, 0xdd56, 0x0180, 0x0061, 0x006c,
    0x0073, 0x1ec4, 0x1ece, 0x1ed2, 0x0072, 0x0100, 0x003b, 0x0073, 0x1eca, 0x1ecb, 0x62d5, 0x006c,
    0x003b, 0x69e3, 0x0075, 0x0073, 0x003b, 0x6a71, 0x0069, 0x0180, 0x003b, 0x006c, 0x0076, 0x1eda,
    0x1edb, 0x1edf, 0x43b5, 0x006f, 0x006e, 0x00bb, 0x1edb, 0x003b, 0x43f5, 0x0200, 0x0063, 0x0073,
    0x0075, 0x0076, 0x1eea, 0x1ef3, 0x1f0b, 0x1f23, 0x0100, 0x0069, 0x006f, 0x1eef, 0x1e31, 0x0072,
    0x0063, 0x00bb, 0x1e2e, 0x0269, 0x1ef9, 0x0000, 0x0000, 0x1efb, 0x00ed, 0x0548, 0x0061, 0x006e,
    0x0074, 0x0100, 0x0067, 0x006c, 0x1f02, 0x1f06, 0x0074, 0x0072, 0x00bb, 0x1e5d, 0x0065, 0x0073,
    0x0073, 0x00bb, 0x1e7a, 0x0180, 0x0061, 0x0065, 0x0069, 0x1f12, 0x1f16, 0x1f1a, 0x006c, 0x0073,
    0x003b, 0x403d, 0x0073, 0x0074, 0x003b, 0x625f, 0x0076, 0x0100, 0x003b, 0x0044, 0x0235, 0x1f20,
    0x0044, 0x003b, 0x6a78, 0x0070, 0x0061, 0x0072, 0x0073, 0x006c, 0x003b, 0x69e5, 0x0100, 0x0044,
    0x0061, 0x1f2f, 0x1f33, 0x006f, 0x0074, 0x003b, 0x6253, 0x0072, 0x0072, 0x003b, 0x6971, 0x0180,
    0x0063, 0x0064, 0x0069, 0x1f3e, 0x1f41, 0x1ef8, 0x0072, 0x003b, 0x612f, 0x006f, 0x00f4, 0x0352,
    0x0100, 0x0061, 0x0068, 0x1f49, 0x1f4b, 0x003b, 0x43b7, 0x803b, 0x00f0, 0x40f0, 0x0100, 0x006d,
    0x0072, 0x1f53, 0x1f57, 0x006c, 0x803b, 0x00eb, 0x40eb, 0x006f, 0x003b, 0x60ac, 0x0180, 0x0063,
    0x0069, 0x0070, 0x1f61, 0x1f64, 0x1f67, 0x006c, 0x003b, 0x4021, 0x0073, 0x00f4, 0x056e, 0x0100,
    0x0065, 0x006f, 0x1f6c, 0x1f74, 0x0063, 0x0074, 0x0061, 0x0074, 0x0069, 0x006f, 0x00ee, 0x0559,
    0x006e, 0x0065, 0x006e, 0x0074, 0x0069, 0x0061, 0x006c, 0x00e5, 0x0579, 0x09e1, 0x1f92, 0x0000,
    0x1f9e, 0x0000, 0x1fa1, 0x1fa7, 0x0000, 0x0000, 0x1fc6, 0x1fcc, 0x0000, 0x1fd3, 0x0000, 0x1fe6,
    0x1fea, 0x2000, 0x0000, 0x2008, 0x205a, 0x006c, 0x006c, 0x0069, 0x006e, 0x0067, 0x0064, 0x006f,
    0x0074, 0x0073, 0x0065, 0x00f1, 0x1e44, 0x0079, 0x003b, 0x4444, 0x006d, 0x0061, 0x006c, 0x0065,
    0x003b, 0x6640, 0x0180, 0x0069, 0x006c, 0x0072, 0x1fad, 0x1fb3, 0x1fc1, 0x006c, 0x0069, 0x0067,
    0x003b, 0x8000, 0xfb03, 0x0269, 0x1fb9, 0x0000, 0x0000, 0x1fbd, 0x0067, 0x003b, 0x8000, 0xfb00,
    0x0069, 0x0067, 0x003b, 0x8000, 0xfb04, 0x003b, 0xc000, 0xd835, 0xdd23, 0x006c, 0x0069, 0x0067,
    0x003b, 0x8000, 0xfb01, 0x006c, 0x0069, 0x0067, 0x003b, 0xc000, 0x0066, 0x006a, 0x0180, 0x0061,
    0x006c, 0x0074, 0x1fd9, 0x1fdc, 0x1fe1, 0x0074, 0x003b, 0x666d, 0x0069, 0x0067, 0x003b, 0x8000,
    0xfb02, 0x006e, 0x0073, 0x003b, 0x65b1, 0x006f, 0x0066, 0x003b, 0x4192, 0x01f0, 0x1fee, 0x0000,
    0x1ff3, 0x0066, 0x003b, 0xc000, 0xd835, 0xdd57, 0x0100, 0x0061, 0x006b, 0x05bf, 0x1ff7, 0x0100,
    0x003b, 0x0076, 0x1ffc, 0x1ffd, 0x62d4, 0x003b, 0x6ad9, 0x0061, 0x0072, 0x0074, 0x0069, 0x006e,
    0x0074, 0x003b, 0x6a0d, 0x0100, 0x0061, 0x006f, 0x200c, 0x2055, 0x0100, 0x0063, 0x0073, 0x2011,
    0x2052, 0x03b1, 0x201a, 0x2030, 0x2038, 0x2045, 0x2048, 0x0000, 0x2050, 0x03b2, 0x2022, 0x2025,
    0x2027, 0x202a, 0x202c, 0x0000, 0x202e, 0x803b, 0x00bd, 0x40bd, 0x003b, 0x6153, 0x803b, 0x00bc,
    0x40bc, 0x003b, 0x6155, 0x003b, 0x6159, 0x003b, 0x615b, 0x01b3, 0x2034, 0x0000, 0x2036, 0x003b,
    0x6154, 0x003b, 0x6156, 0x02b4, 0x203e, 0x2041, 0x0000, 0x0000, 0x2043, 0x803b, 0x00be, 0x40be,
    0x003b, 0x6157, 0x003b, 0x615c, 0x0035, 0x003b, 0x6158, 0x01b6, 0x204c, 0x0000, 0x204e, 0x003b,
    0x615a, 0x003b, 0x615d, 0x0038, 0x003b, 0x615e, 0x006c, 0x003b, 0x6044, 0x0077, 0x006e, 0x003b,
    0x6322, 0x0063, 0x0072, 0x003b, 0xc000, 0xd835, 0xdcbb, 0x0880, 0x0045, 0x0061, 0x0062, 0x0063,
    0x0064, 0x0065, 0x0066, 0x0067, 0x0069, 0x006a, 0x006c, 0x006e, 0x006f, 0x0072, 0x0073, 0x0074,
    0x0076, 0x2082, 0x2089, 0x209f, 0x20a5, 0x20b0, 0x20b4, 0x20f0, 0x20f5, 0x20fa, 0x20ff, 0x2103,
    0x2112, 0x2138, 0x0317, 0x213e, 0x2152, 0x219e, 0x0100, 0x003b, 0x006c, 0x064d, 0x2087, 0x003b,
    0x6a8c, 0x0180, 0x0063, 0x006d, 0x0070, 0x2090, 0x2095, 0x209d, 0x0075, 0x0074, 0x0065, 0x003b,
    0x41f5, 0x006d, 0x0061, 0x0100, 0x003b, 0x0064, 0x209c, 0x1cda, 0x43b3, 0x003b, 0x6a86, 0x0072,
    0x0065, 0x0076, 0x0065, 0x003b, 0x411f, 0x0100, 0x0069, 0x0079, 0x20aa, 0x20ae, 0x0072, 0x0063,
    0x003b, 0x411d, 0x003b, 0x4433, 0x006f, 0x0074, 0x003b, 0x4121, 0x0200, 0x003b, 0x006c, 0x0071,
    0x0073, 0x063e, 0x0642, 0x20bd, 0x20c9, 0x0180, 0x003b, 0x0071, 0x0073, 0x063e, 0x064c, 0x20c4,
    0x006c, 0x0061, 0x006e, 0x00f4, 0x0665, 0x0200, 0x003b, 0x0063, 0x0064, 0x006c, 0x0665, 0x20d2,
    0x20d5, 0x20e5, 0x0063, 0x003b, 0x6aa9, 0x006f, 0x0074, 0x0100, 0x003b, 0x006f, 0x20dc, 0x20dd,
    0x6a80, 0x0100, 0x003b, 0x006c, 0x20e2, 0x20e3, 0x6a82, 0x003b, 0x6a84, 0x0100, 0x003b, 0x0065,
    0x20ea, 0x20ed, 0xc000, 0x22db, 0xfe00, 0x0073, 0x003b, 0x6a94, 0x0072, 0x003b, 0xc000, 0xd835,
    0xdd24, 0x0100, 0x003b, 0x0067, 0x0673, 0x061b, 0x006d, 0x0065, 0x006c, 0x003b, 0x6137, 0x0063,
    0x0079, 0x003b, 0x4453, 0x0200, 0x003b, 0x0045, 0x0061, 0x006a, 0x065a, 0x210c, 0x210e, 0x2110,
    0x003b, 0x6a92, 0x003b, 0x6aa5, 0x003b, 0x6aa4, 0x0200, 0x0045, 0x0061, 0x0065, 0x0073, 0x211b,
    0x211d, 0x2129, 0x2134, 0x003b, 0x6269, 0x0070, 0x0100, 0x003b, 0x0070, 0x2123, 0x2124, 0x6a8a,
    0x0072, 0x006f, 0x0078, 0x00bb, 0x2124, 0x0100, 0x003b, 0x0071, 0x212e, 0x212f, 0x6a88, 0x0100,
    0x003b, 0x0071, 0x212e, 0x211b, 0x0069, 0x006d, 0x003b, 0x62e7, 0x0070, 0x0066, 0x003b, 0xc000,
    0xd835, 0xdd58, 0x0100, 0x0063, 0x0069, 0x2143, 0x2146, 0x0072, 0x003b, 0x610a, 0x006d, 0x0180,
    0x003b, 0x0065, 0x006c, 0x066b, 0x214e, 0x2150, 0x003b, 0x6a8e, 0x003b, 0x6a90, 0x8300, 0x003e,
    0x003b, 0x0063, 0x0064, 0x006c, 0x0071, 0x0072, 0x05ee, 0x2160, 0x216a, 0x216e, 0x2173, 0x2179,
    0x0100, 0x0063, 0x0069, 0x2165, 0x2167, 0x003b, 0x6aa7, 0x0072, 0x003b, 0x6a7a, 0x006f, 0x0074,
    0x003b, 0x62d7, 0x0050, 0x0061, 0x0072, 0x003b, 0x6995, 0x0075, 0x0065, 0x0073, 0x0074, 0x003b,
    0x6a7c, 0x0280, 0x0061, 0x0064, 0x0065, 0x006c, 0x0073, 0x2184, 0x216a, 0x2190, 0x0656, 0x219b,
    0x01f0, 0x2189, 0x0000, 0x218e, 0x0070, 0x0072, 0x006f, 0x00f8, 0x209e, 0x0072, 0x003b, 0x6978,
    0x0071, 0x0100, 0x006c, 0x0071, 0x063f, 0x2196, 0x006c, 0x0065, 0x0073, 0x00f3, 0x2088, 0x0069,
    0x00ed, 0x066b, 0x0100, 0x0065, 0x006e, 0x21a3, 0x21ad, 0x0072, 0x0074, 0x006e, 0x0065, 0x0071,
    0x0071, 0x003b, 0xc000, 0x2269, 0xfe00, 0x00c5, 0x21aa, 0x0500, 0x0041, 0x0061, 0x0062, 0x0063,
    0x0065, 0x0066, 0x006b, 0x006f, 0x0073, 0x0079, 0x21c4, 0x21c7, 0x21f1, 0x21f5, 0x21fa, 0x2218,
    0x221d, 0x222f, 0x2268, 0x227d, 0x0072, 0x00f2, 0x03a0, 0x0200, 0x0069, 0x006c, 0x006d, 0x0072,
    0x21d0, 0x21d4, 0x21d7, 0x21db, 0x0072, 0x0073, 0x00f0, 0x1484, 0x0066, 0x00bb, 0x2024, 0x0069,
    0x006c, 0x00f4, 0x06a9, 0x0100, 0x0064, 0x0072, 0x21e0, 0x21e4, 0x0063, 0x0079, 0x003b, 0x444a,
    0x0180, 0x003b, 0x0063, 0x0077, 0x08f4, 0x21eb, 0x21ef, 0x0069, 0x0072, 0x003b, 0x6948, 0x003b,
    0x61ad, 0x0061, 0x0072, 0x003b, 0x610f, 0x0069, 0x0072, 0x0063, 0x003b, 0x4125, 0x0180, 0x0061,
    0x006c, 0x0072, 0x2201, 0x220e, 0x2213, 0x0072, 0x0074, 0x0073, 0x0100, 0x003b, 0x0075, 0x2209,
    0x220a, 0x6665, 0x0069, 0x0074, 0x00bb, 0x220a, 0x006c, 0x0069, 0x0070, 0x003b, 0x6026, 0x0063,
    0x006f, 0x006e, 0x003b, 0x62b9, 0x0072, 0x003b, 0xc000, 0xd835, 0xdd25, 0x0073, 0x0100, 0x0065,
    0x0077, 0x2223, 0x2229, 0x0061, 0x0072, 0x006f, 0x0077, 0x003b, 0x6925, 0x0061, 0x0072, 0x006f,
    0x0077, 0x003b, 0x6926, 0x0280, 0x0061, 0x006d, 0x006f, 0x0070, 0x0072, 0x223a, 0x223e, 0x2243,
    0x225e, 0x2263, 0x0072, 0x0072, 0x003b, 0x61ff, 0x0074, 0x0068, 0x0074, 0x003b, 0x623b, 0x006b,
    0x0100, 0x006c, 0x0072, 0x2249, 0x2253, 0x0065, 0x0066, 0x0074, 0x0061, 0x0072, 0x0072, 0x006f,
    0x0077, 0x003b, 0x61a9, 0x0069, 0x0067, 0x0068, 0x0074, 0x0061, 0x0072, 0x0072, 0x006f, 0x0077,
    0x003b, 0x61aa, 0x0066, 0x003b, 0xc000, 0xd835, 0xdd59, 0x0062, 0x0061, 0x0072, 0x003b, 0x6015,
    0x0180, 0x0063, 0x006c, 0x0074, 0x226f, 0x2274, 0x2278, 0x0072, 0x003b, 0xc000, 0xd835, 0xdcbd,
    0x0061, 0x0073, 0x00e8, 0x21f4, 0x0072, 0x006f, 0x006b, 0x003b, 0x4127, 0x0100, 0x0062, 0x0070,
    0x2282, 0x2287, 0x0075, 0x006c, 0x006c, 0x003b, 0x6043, 0x0068, 0x0065, 0x006e, 0x00bb, 0x1c5b,
    0x0ae1, 0x22a3, 0x0000, 0x22aa, 0x0000, 0x22b8, 0x22c5, 0x22ce, 0x0000, 0x22d5, 0x22f3, 0x0000,
    0x0000, 0x22f8, 0x2322, 0x2367, 0x2362, 0x237f, 0x0000, 0x2386, 0x23aa, 0x23b4, 0x0063, 0x0075,
    0x0074, 0x0065, 0x803b, 0x00ed, 0x40ed, 0x0180, 0x003b, 0x0069, 0x0079, 0x0771, 0x22b0, 0x22b5,
    0x0072, 0x0063, 0x803b, 0x00ee, 0x40ee, 0x003b, 0x4438, 0x0100, 0x0063, 0x0078, 0x22bc, 0x22bf,
    0x0079, 0x003b, 0x4435, 0x0063, 0x006c, 0x803b, 0x00a1, 0x40a1, 0x0100, 0x0066, 0x0072, 0x039f,
    0x22c9, 0x003b, 0xc000, 0xd835, 0xdd26, 0x0072, 0x0061, 0x0076, 0x0065, 0x803b, 0x00ec, 0x40ec,
    0x0200, 0x003b, 0x0069, 0x006e, 0x006f, 0x073e, 0x22dd, 0x22e9, 0x22ee, 0x0100, 0x0069, 0x006e,
    0x22e2, 0x22e6, 0x006e, 0x0074, 0x003b, 0x6a0c, 0x0074, 0x003b, 0x622d, 0x0066, 0x0069, 0x006e,
    0x003b, 0x69dc, 0x0074, 0x0061, 0x003b, 0x6129, 0x006c, 0x0069, 0x0067, 0x003b, 0x4133, 0x0180,
    0x0061, 0x006f, 0x0070, 0x22fe, 0x231a, 0x231d, 0x0180, 0x0063, 0x0067, 0x0074, 0x2305, 0x2308,
    0x2317, 0x0072, 0x003b, 0x412b, 0x0180, 0x0065, 0x006c, 0x0070, 0x071f, 0x230f, 0x2313, 0x0069,
    0x006e, 0x00e5, 0x078e, 0x0061, 0x0072, 0x00f4, 0x0720, 0x0068, 0x003b, 0x4131, 0x0066, 0x003b,
    0x62b7, 0x0065, 0x0064, 0x003b, 0x41b5, 0x0280, 0x003b, 0x0063, 0x0066, 0x006f, 0x0074, 0x04f4,
    0x232c, 0x2331, 0x233d, 0x2341, 0x0061, 0x0072, 0x0065, 0x003b, 0x6105, 0x0069, 0x006e, 0x0100,
    0x003b, 0x0074, 0x2338, 0x2339, 0x621e, 0x0069, 0x0065, 0x003b, 0x69dd, 0x0064, 0x006f, 0x00f4,
    0x2319, 0x0280, 0x003b, 0x0063, 0x0065, 0x006c, 0x0070, 0x0757, 0x234c, 0x2350, 0x235b, 0x2361,
    0x0061, 0x006c, 0x003b, 0x62ba, 0x0100, 0x0067, 0x0072, 0x2355, 0x2359, 0x0065, 0x0072, 0x00f3,
    0x1563, 0x00e3, 0x234d, 0x0061, 0x0072, 0x0068, 0x006b, 0x003b, 0x6a17, 0x0072, 0x006f, 0x0064,
    0x003b, 0x6a3c, 0x0200, 0x0063, 0x0067, 0x0070, 0x0074, 0x236f, 0x2372, 0x2376, 0x237b, 0x0079,
    0x003b, 0x4451, 0x006f, 0x006e, 0x003b, 0x412f, 0x0066, 0x003b, 0xc000, 0xd835, 0xdd5a, 0x0061,
    0x003b, 0x43b9, 0x0075, 0x0065, 0x0073, 0x0074, 0x803b, 0x00bf, 0x40bf, 0x0100, 0x0063, 0x0069,
    0x238a, 0x238f, 0x0072, 0x003b, 0xc000, 0xd835, 0xdcbe, 0x006e, 0x0280, 0x003b, 0x0045, 0x0064,
    0x0073, 0x0076, 0x04f4, 0x239b, 0x239d, 0x23a1, 0x04f3, 0x003b, 0x62f9, 0x006f, 0x0074, 0x003b,
    0x62f5, 0x0100, 0x003b, 0x0076, 0x23a6, 0x23a7, 0x62f4, 0x003b, 0x62f3, 0x0100, 0x003b, 0x0069,
    0x0777, 0x23ae, 0x006c, 0x0064, 0x0065, 0x003b, 0x4129, 0x01eb, 0x23b8, 0x0000, 0x23bc, 0x0063,
    0x0079, 0x003b, 0x4456, 0x006c, 0x803b, 0x00ef, 0x40ef, 0x0300, 0x0063, 0x0066, 0x006d, 0x006f,
    0x0073, 0x0075, 0x23cc, 0x23d7, 0x23dc, 0x23e1, 0x23e7, 0x23f5, 0x0100, 0x0069, 0x0079, 0x23d1,
    0x23d5, 0x0072, 0x0063, 0x003b, 0x4135, 0x003b, 0x4439, 0x0072, 0x003b, 0xc000, 0xd835, 0xdd27,
    0x0061, 0x0074, 0x0068, 0x003b, 0x4237, 0x0070, 0x0066, 0x003b, 0xc000, 0xd835, 0xdd5b, 0x01e3,
    0x23ec, 0x0000, 0x23f1, 0x0072, 0x003b, 0xc000, 0xd835, 0xdcbf, 0x0072, 0x0063, 0x0079, 0x003b,
    0x4458, 0x006b, 0x0063, 0x0079, 0x003b, 0x4454, 0x0400, 0x0061, 0x0063, 0x0066, 0x0067, 0x0068,
    0x006a, 0x006f, 0x0073, 0x240b, 0x2416, 0x2422, 0x2427, 0x242d, 0x2431, 0x2435, 0x243b, 0x0070,
    0x0070, 0x0061, 0x0100, 0x003b, 0x0076, 0x2413, 0x2414, 0x43ba, 0x003b, 0x43f0, 0x0100, 0x0065,
    0x0079, 0x241b, 0x2420, 0x0064, 0x0069, 0x006c, 0x003b, 0x4137, 0x003b, 0x443a, 0x0072, 0x003b,
    0xc000, 0xd835, 0xdd28, 0x0072, 0x0065, 0x0065, 0x006e, 0x003b, 0x4138, 0x0063, 0x0079, 0x003b,
    0x4445, 0x0063, 0x0079, 0x003b, 0x445c, 0x0070, 0x0066, 0x003b, 0xc000, 0xd835, 0xdd5c, 0x0063,
    0x0072, 0x003b, 0xc000, 0xd835, 0xdcc0, 0x0b80, 0x0041, 0x0042, 0x0045, 0x0048, 0x0061, 0x0062,
    0x0063, 0x0064, 0x0065, 0x0066, 0x0067, 0x0068, 0x006a, 0x006c, 0x006d, 0x006e, 0x006f, 0x0070,
    0x0072, 0x0073, 0x0074, 0x0075, 0x0076, 0x2470, 0x2481, 0x2486, 0x248d, 0x2491, 0x250e, 0x253d,
    0x255a, 0x2580, 0x264e, 0x265e, 0x2665, 0x2679, 0x267d, 0x269a, 0x26b2, 0x26d8, 0x275d, 0x2768,
    0x278b, 0x27c0, 0x2801, 0x2812, 0x0180, 0x0061, 0x0072, 0x0074, 0x2477, 0x247a, 0x247c, 0x0072,
    0x00f2, 0x09c6, 0x00f2, 0x0395, 0x0061, 0x0069, 0x006c, 0x003b, 0x691b, 0x0061, 0x0072, 0x0072,
    0x003b, 0x690e, 0x0100, 0x003b, 0x0067, 0x0994, 0x248b, 0x003b, 0x6a8b, 0x0061, 0x0072, 0x003b,
    0x6962, 0x0963, 0x24a5, 0x0000, 0x24aa, 0x0000, 0x24b1, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x24b5, 0x24ba, 0x0000, 0x24c6, 0x24c8, 0x24cd, 0x0000, 0x24f9, 0x0075, 0x0074, 0x0065, 0x003b,
    0x413a, 0x006d, 0x0070, 0x0074, 0x0079, 0x0076, 0x003b, 0x69b4, 0x0072, 0x0061, 0x00ee, 0x084c,
    0x0062, 0x0064, 0x0061, 0x003b, 0x43bb, 0x0067, 0x0180, 0x003b, 0x0064, 0x006c, 0x088e, 0x24c1,
    0x24c3, 0x003b, 0x6991, 0x00e5, 0x088e, 0x003b, 0x6a85, 0x0075, 0x006f, 0x803b, 0x00ab, 0x40ab,
    0x0072, 0x0400, 0x003b, 0x0062, 0x0066, 0x0068, 0x006c, 0x0070, 0x0073, 0x0074, 0x0899, 0x24de,
    0x24e6, 0x24e9, 0x24eb, 0x24ee, 0x24f1, 0x24f5, 0x0100, 0x003b, 0x0066, 0x089d, 0x24e3, 0x0073,
    0x003b, 0x691f, 0x0073, 0x003b, 0x691d, 0x00eb, 0x2252, 0x0070, 0x003b, 0x61ab, 0x006c, 0x003b,
    0x6939, 0x0069, 0x006d, 0x003b, 0x6973, 0x006c, 0x003b, 0x61a2, 0x0180, 0x003b, 0x0061, 0x0065,
    0x24ff, 0x2500, 0x2504, 0x6aab, 0x0069, 0x006c, 0x003b, 0x6919, 0x0100, 0x003b, 0x0073, 0x2509,
    0x250a, 0x6aad, 0x003b, 0xc000, 0x2aad, 0xfe00, 0x0180, 0x0061, 0x0062, 0x0072, 0x2515, 0x2519,
    0x251d, 0x0072, 0x0072, 0x003b, 0x690c, 0x0072, 0x006b, 0x003b, 0x6772, 0x0100, 0x0061, 0x006b,
    0x2522, 0x252c, 0x0063, 0x0100, 0x0065, 0x006b, 0x2528, 0x252a, 0x003b, 0x407b, 0x003b, 0x405b,
    0x0100, 0x0065, 0x0073, 0x2531, 0x2533, 0x003b, 0x698b, 0x006c, 0x0100, 0x0064, 0x0075, 0x2539,
    0x253b, 0x003b, 0x698f, 0x003b, 0x698d, 0x0200, 0x0061, 0x0065, 0x0075, 0x0079, 0x2546, 0x254b,
    0x2556, 0x2558, 0x0072, 0x006f, 0x006e, 0x003b, 0x413e, 0x0100, 0x0064, 0x0069, 0x2550, 0x2554,
    0x0069, 0x006c, 0x003b, 0x413c, 0x00ec, 0x08b0, 0x00e2, 0x2529, 0x003b, 0x443b, 0x0200, 0x0063,
    0x0071, 0x0072, 0x0073, 0x2563, 0x2566, 0x256d, 0x257d, 0x0061, 0x003b, 0x6936, 0x0075, 0x006f,
    0x0100, 0x003b, 0x0072, 0x0e19, 0x1746, 0x0100, 0x0064, 0x0075, 0x2572, 0x2577, 0x0068, 0x0061,
    0x0072, 0x003b, 0x6967, 0x0073, 0x0068, 0x0061, 0x0072, 0x003b, 0x694b, 0x0068, 0x003b, 0x61b2,
    0x0280, 0x003b, 0x0066, 0x0067, 0x0071, 0x0073, 0x258b, 0x258c, 0x0989, 0x25f3, 0x25ff, 0x6264,
    0x0074, 0x0280, 0x0061, 0x0068, 0x006c, 0x0072, 0x0074, 0x2598, 0x25a4, 0x25b7, 0x25c2, 0x25e8,
    0x0072, 0x0072, 0x006f, 0x0077, 0x0100, 0x003b, 0x0074, 0x0899, 0x25a1, 0x0061, 0x00e9, 0x24f6,
    0x0061, 0x0072, 0x0070, 0x006f, 0x006f, 0x006e, 0x0100, 0x0064, 0x0075, 0x25af, 0x25b4, 0x006f,
    0x0077, 0x006e, 0x00bb, 0x045a, 0x0070, 0x00bb, 0x0966, 0x0065, 0x0066, 0x0074, 0x0061, 0x0072,
    0x0072, 0x006f, 0x0077, 0x0073, 0x003b, 0x61c7, 0x0069, 0x0067, 0x0068, 0x0074, 0x0180, 0x0061,
    0x0068, 0x0073, 0x25cd, 0x25d6, 0x25de, 0x0072, 0x0072, 0x006f, 0x0077, 0x0100, 0x003b, 0x0073,
    0x08f4, 0x08a7, 0x0061, 0x0072, 0x0070, 0x006f, 0x006f, 0x006e, 0x00f3, 0x0f98, 0x0071, 0x0075,
    0x0069, 0x0067, 0x0061, 0x0072, 0x0072, 0x006f, 0x00f7, 0x21f0, 0x0068, 0x0072, 0x0065, 0x0065,
    0x0074, 0x0069, 0x006d, 0x0065, 0x0073, 0x003b, 0x62cb, 0x0180, 0x003b, 0x0071, 0x0073, 0x258b,
    0x0993, 0x25fa, 0x006c, 0x0061, 0x006e, 0x00f4, 0x09ac, 0x0280, 0x003b, 0x0063, 0x0064, 0x0067,
    0x0073, 0x09ac, 0x260a, 0x260d, 0x261d, 0x2628, 0x0063, 0x003b, 0x6aa8, 0x006f, 0x0074, 0x0100,
    0x003b, 0x006f, 0x2614, 0x2615, 0x6a7f, 0x0100, 0x003b, 0x0072, 0x261a, 0x261b, 0x6a81, 0x003b,
    0x6a83, 0x0100, 0x003b, 0x0065, 0x2622, 0x2625, 0xc000, 0x22da, 0xfe00, 0x0073, 0x003b, 0x6a93,
    0x0280, 0x0061, 0x0064, 0x0065, 0x0067, 0x0073, 0x2633, 0x2639, 0x263d, 0x2649, 0x264b, 0x0070,
    0x0070, 0x0072, 0x006f, 0x00f8, 0x24c6, 0x006f, 0x0074, 0x003b, 0x62d6, 0x0071, 0x0100, 0x0067,
    0x0071, 0x2643, 0x2645, 0x00f4, 0x0989, 0x0067, 0x0074, 0x00f2, 0x248c, 0x00f4, 0x099b, 0x0069,
    0x00ed, 0x09b2, 0x0180, 0x0069, 0x006c, 0x0072, 0x2655, 0x08e1, 0x265a, 0x0073, 0x0068, 0x0074,
    0x003b, 0x697c, 0x003b, 0xc000, 0xd835, 0xdd29, 0x0100, 0x003b, 0x0045, 0x099c, 0x2663, 0x003b,
    0x6a91, 0x0161, 0x2669, 0x2676, 0x0072, 0x0100, 0x0064, 0x0075, 0x25b2, 0x266e, 0x0100, 0x003b,
    0x006c, 0x0965, 0x2673, 0x003b, 0x696a, 0x006c, 0x006b, 0x003b, 0x6584, 0x0063, 0x0079, 0x003b,
    0x4459, 0x0280, 0x003b, 0x0061, 0x0063, 0x0068, 0x0074, 0x0a48, 0x2688, 0x268b, 0x2691, 0x2696,
    0x0072, 0x00f2, 0x25c1, 0x006f, 0x0072, 0x006e, 0x0065, 0x00f2, 0x1d08, 0x0061, 0x0072, 0x0064,
    0x003b, 0x696b, 0x0072, 0x0069, 0x003b, 0x65fa, 0x0100, 0x0069, 0x006f, 0x269f, 0x26a4, 0x0064,
    0x006f, 0x0074, 0x003b, 0x4140, 0x0075, 0x0073, 0x0074, 0x0100, 0x003b, 0x0061, 0x26ac, 0x26ad,
    0x63b0, 0x0063, 0x0068, 0x0065, 0x00bb, 0x26ad, 0x0200, 0x0045, 0x0061, 0x0065, 0x0073, 0x26bb,
    0x26bd, 0x26c9, 0x26d4, 0x003b, 0x6268, 0x0070, 0x0100, 0x003b, 0x0070, 0x26c3, 0x26c4, 0x6a89,
    0x0072, 0x006f, 0x0078, 0x00bb, 0x26c4, 0x0100, 0x003b, 0x0071, 0x26ce, 0x26cf, 0x6a87, 0x0100,
    0x003b, 0x0071, 0x26ce, 0x26bb, 0x0069, 0x006d, 0x003b, 0x62e6, 0x0400, 0x0061, 0x0062, 0x006e,
    0x006f, 0x0070, 0x0074, 0x0077, 0x007a, 0x26e9, 0x26f4, 0x26f7, 0x271a, 0x272f, 0x2741, 0x2747,
    0x2750, 0x0100, 0x006e, 0x0072, 0x26ee, 0x26f1, 0x0067, 0x003b, 0x67ec, 0x0072, 0x003b, 0x61fd,
    0x0072, 0x00eb, 0x08c1, 0x0067, 0x0180, 0x006c, 0x006d, 0x0072, 0x26ff, 0x270d, 0x2714, 0x0065,
    0x0066, 0x0074, 0x0100, 0x0061, 0x0072, 0x09e6, 0x2707, 0x0069, 0x0067, 0x0068, 0x0074, 0x00e1,
    0x09f2, 0x0061, 0x0070, 0x0073, 0x0074, 0x006f, 0x003b, 0x67fc, 0x0069, 0x0067, 0x0068, 0x0074,
    0x00e1, 0x09fd, 0x0070, 0x0061, 0x0072, 0x0072, 0x006f, 0x0077, 0x0100, 0x006c, 0x0072, 0x2725,
    0x2729, 0x0065, 0x0066, 0x00f4, 0x24ed, 0x0069, 0x0067, 0x0068, 0x0074, 0x003b, 0x61ac, 0x0180,
    0x0061, 0x0066, 0x006c, 0x2736, 0x2739, 0x273d, 0x0072, 0x003b, 0x6985, 0x003b, 0xc000, 0xd835,
    0xdd5d, 0x0075, 0x0073, 0x003b, 0x6a2d, 0x0069, 0x006d, 0x0065, 0x0073, 0x003b, 0x6a34, 0x0161,
    0x274b, 0x274f, 0x0073, 0x0074, 0x003b, 0x6217, 0x00e1, 0x134e, 0x0180, 0x003b, 0x0065, 0x0066,
    0x2757, 0x2758, 0x1800, 0x65ca, 0x006e, 0x0067, 0x0065, 0x00bb, 0x2758, 0x0061, 0x0072, 0x0100,
    0x003b, 0x006c, 0x2764, 0x2765, 0x4028, 0x0074, 0x003b, 0x6993, 0x0280, 0x0061, 0x0063, 0x0068,
    0x006d, 0x0074, 0x2773, 0x2776, 0x277c, 0x2785, 0x2787, 0x0072, 0x00f2, 0x08a8, 0x006f, 0x0072,
    0x006e, 0x0065, 0x00f2, 0x1d8c, 0x0061, 0x0072, 0x0100, 0x003b, 0x0064, 0x0f98, 0x2783, 0x003b,
    0x696d, 0x003b, 0x600e, 0x0072, 0x0069, 0x003b, 0x62bf, 0x0300, 0x0061, 0x0063, 0x0068, 0x0069,
    0x0071, 0x0074, 0x2798, 0x279d, 0x0a40, 0x27a2, 0x27ae, 0x27bb, 0x0071, 0x0075, 0x006f, 0x003b,
    0x6039, 0x0072, 0x003b, 0xc000, 0xd835, 0xdcc1, 0x006d, 0x0180, 0x003b, 0x0065, 0x0067, 0x09b2,
    0x27aa, 0x27ac, 0x003b, 0x6a8d, 0x003b, 0x6a8f, 0x0100, 0x0062, 0x0075, 0x252a, 0x27b3, 0x006f,
    0x0100, 0x003b, 0x0072, 0x0e1f, 0x27b9, 0x003b, 0x601a, 0x0072, 0x006f, 0x006b, 0x003b, 0x4142,
    0x8400, 0x003c, 0x003b, 0x0063, 0x0064, 0x0068, 0x0069, 0x006c, 0x0071, 0x0072, 0x082b, 0x27d2,
    0x2639, 0x27dc, 0x27e0, 0x27e5, 0x27ea, 0x27f0, 0x0100, 0x0063, 0x0069, 0x27d7, 0x27d9, 0x003b,
    0x6aa6, 0x0072, 0x003b, 0x6a79, 0x0072, 0x0065, 0x00e5, 0x25f2, 0x006d, 0x0065, 0x0073, 0x003b,
    0x62c9, 0x0061, 0x0072, 0x0072, 0x003b, 0x6976, 0x0075, 0x0065, 0x0073, 0x0074, 0x003b, 0x6a7b,
    0x0100, 0x0050, 0x0069, 0x27f5, 0x27f9, 0x0061, 0x0072, 0x003b, 0x6996, 0x0180, 0x003b, 0x0065,
    0x0066, 0x2800, 0x092d, 0x181b, 0x65c3, 0x0072, 0x0100, 0x0064, 0x0075, 0x2807, 0x280d, 0x0073,
    0x0068, 0x0061, 0x0072, 0x003b, 0x694a, 0x0068, 0x0061, 0x0072, 0x003b, 0x6966, 0x0100, 0x0065,
    0x006e, 0x2817, 0x2821, 0x0072, 0x0074, 0x006e, 0x0065, 0x0071, 0x0071, 0x003b, 0xc000, 0x2268,
    0xfe00, 0x00c5, 0x281e, 0x0700, 0x0044, 0x0061, 0x0063, 0x0064, 0x0065, 0x0066, 0x0068, 0x0069,
    0x006c, 0x006e, 0x006f, 0x0070, 0x0073, 0x0075, 0x2840, 0x2845, 0x2882, 0x288e, 0x2893, 0x28a0,
    0x28a5, 0x28a8, 0x28da, 0x28e2, 0x28e4, 0x0a83, 0x28f3, 0x2902, 0x0044, 0x006f, 0x0074, 0x003b,
    0x623a, 0x0200, 0x0063, 0x006c, 0x0070, 0x0072, 0x284e, 0x2852, 0x2863, 0x287d, 0x0072, 0x803b,
    0x00af, 0x40af, 0x0100, 0x0065, 0x0074, 0x2857, 0x2859, 0x003b, 0x6642, 0x0100, 0x003b, 0x0065,
    0x285e, 0x285f, 0x6720, 0x0073, 0x0065, 0x00bb, 0x285f, 0x0100, 0x003b, 0x0073, 0x103b, 0x2868,
    0x0074, 0x006f, 0x0200, 0x003b, 0x0064, 0x006c, 0x0075, 0x103b, 0x2873, 0x2877, 0x287b, 0x006f,
    0x0077, 0x00ee, 0x048c, 0x0065, 0x0066, 0x00f4, 0x090f, 0x00f0, 0x13d1, 0x006b, 0x0065, 0x0072,
    0x003b, 0x65ae, 0x0100, 0x006f, 0x0079, 0x2887, 0x288c, 0x006d, 0x006d, 0x0061, 0x003b, 0x6a29,
    0x003b, 0x443c, 0x0061, 0x0073, 0x0068, 0x003b, 0x6014, 0x0061, 0x0073, 0x0075, 0x0072, 0x0065,
    0x0064, 0x0061, 0x006e, 0x0067, 0x006c, 0x0065, 0x00bb, 0x1626, 0x0072, 0x003b, 0xc000, 0xd835,
    0xdd2a, 0x006f, 0x003b, 0x6127, 0x0180, 0x0063, 0x0064, 0x006e, 0x28af, 0x28b4, 0x28c9, 0x0072,
    0x006f, 0x803b, 0x00b5, 0x40b5, 0x0200, 0x003b, 0x0061, 0x0063, 0x0064, 0x1464, 0x28bd, 0x28c0,
    0x28c4, 0x0073, 0x00f4, 0x16a7, 0x0069, 0x0072, 0x003b, 0x6af0, 0x006f, 0x0074, 0x80bb, 0x00b7,
    0x01b5, 0x0075, 0x0073, 0x0180, 0x003b, 0x0062, 0x0064, 0x28d2, 0x1903, 0x28d3, 0x6212, 0x0100,
    0x003b, 0x0075, 0x1d3c, 0x28d8, 0x003b, 0x6a2a, 0x0163, 0x28de, 0x28e1, 0x0070, 0x003b, 0x6adb,
    0x00f2, 0x2212, 0x00f0, 0x0a81, 0x0100, 0x0064, 0x0070, 0x28e9, 0x28ee, 0x0065, 0x006c, 0x0073,
    0x003b, 0x62a7, 0x0066, 0x003b, 0xc000, 0xd835, 0xdd5e, 0x0100, 0x0063, 0x0074, 0x28f8, 0x28fd,
    0x0072, 0x003b, 0xc000, 0xd835, 0xdcc2, 0x0070, 0x006f, 0x0073, 0x00bb, 0x159d, 0x0180, 0x003b,
    0x006c, 0x006d, 0x2909, 0x290a, 0x290d, 0x43bc, 0x0074, 0x0069, 0x006d, 0x0061, 0x0070, 0x003b,
    0x62b8, 0x0c00, 0x0047, 0x004c, 0x0052, 0x0056, 0x0061, 0x0062, 0x0063, 0x0064, 0x0065, 0x0066,
    0x0067, 0x0068, 0x0069, 0x006a, 0x006c, 0x006d, 0x006f, 0x0070, 0x0072, 0x0073, 0x0074, 0x0075,
    0x0076, 0x0077, 0x2942, 0x2953, 0x297e, 0x2989, 0x2998, 0x29da, 0x29e9, 0x2a15, 0x2a1a, 0x2a58,
    0x2a5d, 0x2a83, 0x2a95, 0x2aa4, 0x2aa8, 0x2b04, 0x2b07, 0x2b44, 0x2b7f, 0x2bae, 0x2c34, 0x2c67,
    0x2c7c, 0x2ce9, 0x0100, 0x0067, 0x0074, 0x2947, 0x294b, 0x003b, 0xc000, 0x22d9, 0x0338, 0x0100,
    0x003b, 0x0076, 0x2950, 0x0bcf, 0xc000, 0x226b, 0x20d2, 0x0180, 0x0065, 0x006c, 0x0074, 0x295a,
    0x2972, 0x2976, 0x0066, 0x0074, 0x0100, 0x0061, 0x0072, 0x2961, 0x2967, 0x0072, 0x0072, 0x006f,
    0x0077, 0x003b, 0x61cd, 0x0069, 0x0067, 0x0068, 0x0074, 0x0061, 0x0072, 0x0072, 0x006f, 0x0077,
    0x003b, 0x61ce, 0x003b, 0xc000, 0x22d8, 0x0338, 0x0100, 0x003b, 0x0076, 0x297b, 0x0c47, 0xc000,
    0x226a, 0x20d2, 0x0069, 0x0067, 0x0068, 0x0074, 0x0061, 0x0072, 0x0072, 0x006f, 0x0077, 0x003b,
    0x61cf, 0x0100, 0x0044, 0x0064, 0x298e, 0x2993, 0x0061, 0x0073, 0x0068, 0x003b, 0x62af, 0x0061,
    0x0073, 0x0068, 0x003b, 0x62ae, 0x0280, 0x0062, 0x0063, 0x006e, 0x0070, 0x0074, 0x29a3, 0x29a7,
    0x29ac, 0x29b1, 0x29cc, 0x006c, 0x0061, 0x00bb, 0x02de, 0x0075, 0x0074, 0x0065, 0x003b, 0x4144,
    0x0067, 0x003b, 0xc000, 0x2220, 0x20d2, 0x0280, 0x003b, 0x0045, 0x0069, 0x006f, 0x0070, 0x0d84,
    0x29bc, 0x29c0, 0x29c5, 0x29c8, 0x003b, 0xc000, 0x2a70, 0x0338, 0x0064, 0x003b, 0xc000, 0x224b,
    0x0338, 0x0073, 0x003b, 0x4149, 0x0072, 0x006f, 0x00f8, 0x0d84, 0x0075, 0x0072, 0x0100, 0x003b,
    0x0061, 0x29d3, 0x29d4, 0x666e, 0x006c, 0x0100, 0x003b, 0x0073, 0x29d3, 0x0b38, 0x01f3, 0x29df,
    0x0000, 0x29e3, 0x0070, 0x80bb, 0x00a0, 0x0b37, 0x006d, 0x0070, 0x0100, 0x003b, 0x0065, 0x0bf9,
    0x0c00, 0x0280, 0x0061, 0x0065, 0x006f, 0x0075, 0x0079, 0x29f4, 0x29fe, 0x2a03, 0x2a10, 0x2a13,
    0x01f0, 0x29f9, 0x0000, 0x29fb, 0x003b, 0x6a43, 0x006f, 0x006e, 0x003b, 0x4148, 0x0064, 0x0069,
    0x006c, 0x003b, 0x4146, 0x006e, 0x0067, 0x0100, 0x003b, 0x0064, 0x0d7e, 0x2a0a, 0x006f, 0x0074,
    0x003b, 0xc000, 0x2a6d, 0x0338, 0x0070, 0x003b, 0x6a42, 0x003b, 0x443d, 0x0061, 0x0073, 0x0068,
    0x003b, 0x6013, 0x0380, 0x003b, 0x0041, 0x0061, 0x0064, 0x0071, 0x0073, 0x0078, 0x0b92, 0x2a29,
    0x2a2d, 0x2a3b, 0x2a41, 0x2a45, 0x2a50, 0x0072, 0x0072, 0x003b, 0x61d7, 0x0072, 0x0100, 0x0068,
    0x0072, 0x2a33, 0x2a36, 0x006b, 0x003b, 0x6924, 0x0100, 0x003b, 0x006f, 0x13f2, 0x13f0, 0x006f,
    0x0074, 0x003b, 0xc000, 0x2250, 0x0338, 0x0075, 0x0069, 0x00f6, 0x0b63, 0x0100, 0x0065, 0x0069,
    0x2a4a, 0x2a4e, 0x0061, 0x0072, 0x003b, 0x6928, 0x00ed, 0x0b98, 0x0069, 0x0073, 0x0074, 0x0100,
    0x003b, 0x0073, 0x0ba0, 0x0b9f, 0x0072, 0x003b, 0xc000, 0xd835, 0xdd2b, 0x0200, 0x0045, 0x0065,
    0x0073, 0x0074, 0x0bc5, 0x2a66, 0x2a79, 0x2a7c, 0x0180, 0x003b, 0x0071, 0x0073, 0x0bbc, 0x2a6d,
    0x0be1, 0x0180, 0x003b, 0x0071, 0x0073, 0x0bbc, 0x0bc5, 0x2a74, 0x006c, 0x0061, 0x006e, 0x00f4,
    0x0be2, 0x0069, 0x00ed, 0x0bea, 0x0100, 0x003b, 0x0072, 0x0bb6, 0x2a81, 0x00bb, 0x0bb7, 0x0180,
    0x0041, 0x0061, 0x0070, 0x2a8a, 0x2a8d, 0x2a91, 0x0072, 0x00f2, 0x2971, 0x0072, 0x0072, 0x003b,
    0x61ae, 0x0061, 0x0072, 0x003b, 0x6af2, 0x0180, 0x003b, 0x0073, 0x0076, 0x0f8d, 0x2a9c, 0x0f8c,
    0x0100, 0x003b, 0x0064, 0x2aa1, 0x2aa2, 0x62fc, 0x003b, 0x62fa, 0x0063, 0x0079, 0x003b, 0x445a,
    0x0380, 0x0041, 0x0045, 0x0061, 0x0064, 0x0065, 0x0073, 0x0074, 0x2ab7, 0x2aba, 0x2abe, 0x2ac2,
    0x2ac5, 0x2af6, 0x2af9, 0x0072, 0x00f2, 0x2966, 0x003b, 0xc000, 0x2266, 0x0338, 0x0072, 0x0072,
    0x003b, 0x619a, 0x0072, 0x003b, 0x6025, 0x0200, 0x003b, 0x0066, 0x0071, 0x0073, 0x0c3b, 0x2ace,
    0x2ae3, 0x2aef, 0x0074, 0x0100, 0x0061, 0x0072, 0x2ad4, 0x2ad9, 0x0072, 0x0072, 0x006f, 0x00f7,
    0x2ac1, 0x0069, 0x0067, 0x0068, 0x0074, 0x0061, 0x0072, 0x0072, 0x006f, 0x00f7, 0x2a90, 0x0180,
    0x003b, 0x0071, 0x0073, 0x0c3b, 0x2aba, 0x2aea, 0x006c, 0x0061, 0x006e, 0x00f4, 0x0c55, 0x0100,
    0x003b, 0x0073, 0x0c55, 0x2af4, 0x00bb, 0x0c36, 0x0069, 0x00ed, 0x0c5d, 0x0100, 0x003b, 0x0072,
    0x0c35, 0x2afe, 0x0069, 0x0100, 0x003b, 0x0065, 0x0c1a, 0x0c25, 0x0069, 0x00e4, 0x0d90, 0x0100,
    0x0070, 0x0074, 0x2b0c, 0x2b11, 0x0066, 0x003b, 0xc000, 0xd835, 0xdd5f, 0x8180, 0x00ac, 0x003b,
    0x0069, 0x006e, 0x2b19, 0x2b1a, 0x2b36, 0x40ac, 0x006e, 0x0200, 0x003b, 0x0045, 0x0064, 0x0076,
    0x0b89, 0x2b24, 0x2b28, 0x2b2e, 0x003b, 0xc000, 0x22f9, 0x0338, 0x006f, 0x0074, 0x003b, 0xc000,
    0x22f5, 0x0338, 0x01e1, 0x0b89, 0x2b33, 0x2b35, 0x003b, 0x62f7, 0x003b, 0x62f6, 0x0069, 0x0100,
    0x003b, 0x0076, 0x0cb8, 0x2b3c, 0x01e1, 0x0cb8, 0x2b41, 0x2b43, 0x003b, 0x62fe, 0x003b, 0x62fd,
    0x0180, 0x0061, 0x006f, 0x0072, 0x2b4b, 0x2b63, 0x2b69, 0x0072, 0x0200, 0x003b, 0x0061, 0x0073,
    0x0074, 0x0b7b, 0x2b55, 0x2b5a, 0x2b5f, 0x006c, 0x006c, 0x0065, 0x00ec, 0x0b7b, 0x006c, 0x003b,
    0xc000, 0x2afd, 0x20e5, 0x003b, 0xc000, 0x2202, 0x0338, 0x006c, 0x0069, 0x006e, 0x0074, 0x003b,
    0x6a14, 0x0180, 0x003b, 0x0063, 0x0065, 0x0c92, 0x2b70, 0x2b73, 0x0075, 0x00e5, 0x0ca5, 0x0100,
    0x003b, 0x0063, 0x0c98, 0x2b78, 0x0100, 0x003b, 0x0065, 0x0c92, 0x2b7d, 0x00f1, 0x0c98, 0x0200,
    0x0041, 0x0061, 0x0069, 0x0074, 0x2b88, 0x2b8b, 0x2b9d, 0x2ba7, 0x0072, 0x00f2, 0x2988, 0x0072,
    0x0072, 0x0180, 0x003b, 0x0063, 0x0077, 0x2b94, 0x2b95, 0x2b99, 0x619b, 0x003b, 0xc000, 0x2933,
    0x0338, 0x003b, 0xc000, 0x219d, 0x0338, 0x0067, 0x0068, 0x0074, 0x0061, 0x0072, 0x0072, 0x006f,
    0x0077, 0x00bb, 0x2b95, 0x0072, 0x0069, 0x0100, 0x003b, 0x0065, 0x0ccb, 0x0cd6, 0x0380, 0x0063,
    0x0068, 0x0069, 0x006d, 0x0070, 0x0071, 0x0075, 0x2bbd, 0x2bcd, 0x2bd9, 0x2b04, 0x0b78, 0x2be4,
    0x2bef, 0x0200, 0x003b, 0x0063, 0x0065, 0x0072, 0x0d32, 0x2bc6, 0x0d37, 0x2bc9, 0x0075, 0x00e5,
    0x0d45, 0x003b, 0xc000, 0xd835, 0xdcc3, 0x006f, 0x0072, 0x0074, 0x026d, 0x2b05, 0x0000, 0x0000,
    0x2bd6, 0x0061, 0x0072, 0x00e1, 0x2b56, 0x006d, 0x0100, 0x003b, 0x0065, 0x0d6e, 0x2bdf, 0x0100,
    0x003b, 0x0071, 0x0d74, 0x0d73, 0x0073, 0x0075, 0x0100, 0x0062, 0x0070, 0x2beb, 0x2bed, 0x00e5,
    0x0cf8, 0x00e5, 0x0d0b, 0x0180, 0x0062, 0x0063, 0x0070, 0x2bf6, 0x2c11, 0x2c19, 0x0200, 0x003b,
    0x0045, 0x0065, 0x0073, 0x2bff, 0x2c00, 0x0d22, 0x2c04, 0x6284, 0x003b, 0xc000, 0x2ac5, 0x0338,
    0x0065, 0x0074, 0x0100, 0x003b, 0x0065, 0x0d1b, 0x2c0b, 0x0071, 0x0100, 0x003b, 0x0071, 0x0d23,
    0x2c00, 0x0063, 0x0100, 0x003b, 0x0065, 0x0d32, 0x2c17, 0x00f1, 0x0d38, 0x0200, 0x003b, 0x0045,
    0x0065, 0x0073, 0x2c22, 0x2c23, 0x0d5f, 0x2c27, 0x6285, 0x003b, 0xc000, 0x2ac6, 0x0338, 0x0065,
    0x0074, 0x0100, 0x003b, 0x0065, 0x0d58, 0x2c2e, 0x0071, 0x0100, 0x003b, 0x0071, 0x0d60, 0x2c23,
    0x0200, 0x0067, 0x0069, 0x006c, 0x0072, 0x2c3d, 0x2c3f, 0x2c45, 0x2c47, 0x00ec, 0x0bd7, 0x006c,
    0x0064, 0x0065, 0x803b, 0x00f1, 0x40f1, 0x00e7, 0x0c43, 0x0069, 0x0061, 0x006e, 0x0067, 0x006c,
    0x0065, 0x0100, 0x006c, 0x0072, 0x2c52, 0x2c5c, 0x0065, 0x0066, 0x0074, 0x0100, 0x003b, 0x0065,
    0x0c1a, 0x2c5a, 0x00f1, 0x0c26, 0x0069, 0x0067, 0x0068, 0x0074, 0x0100, 0x003b, 0x0065, 0x0ccb,
    0x2c65, 0x00f1, 0x0cd7, 0x0100, 0x003b, 0x006d, 0x2c6c, 0x2c6d, 0x43bd, 0x0180, 0x003b, 0x0065,
    0x0073, 0x2c74, 0x2c75, 0x2c79, 0x4023, 0x0072, 0x006f, 0x003b, 0x6116, 0x0070, 0x003b, 0x6007,
    0x0480, 0x0044, 0x0048, 0x0061, 0x0064, 0x0067, 0x0069, 0x006c, 0x0072, 0x0073, 0x2c8f, 0x2c94,
    0x2c99, 0x2c9e, 0x2ca3, 0x2cb0, 0x2cb6, 0x2cd3, 0x2ce3, 0x0061, 0x0073, 0x0068, 0x003b, 0x62ad,
    0x0061, 0x0072, 0x0072, 0x003b, 0x6904, 0x0070, 0x003b, 0xc000, 0x224d, 0x20d2, 0x0061, 0x0073,
    0x0068, 0x003b, 0x62ac, 0x0100, 0x0065, 0x0074, 0x2ca8, 0x2cac, 0x003b, 0xc000, 0x2265, 0x20d2,
    0x003b, 0xc000, 0x003e, 0x20d2, 0x006e, 0x0066, 0x0069, 0x006e, 0x003b, 0x69de, 0x0180, 0x0041,
    0x0065, 0x0074, 0x2cbd, 0x2cc1, 0x2cc5, 0x0072, 0x0072, 0x003b, 0x6902, 0x003b, 0xc000, 0x2264,
    0x20d2, 0x0100, 0x003b, 0x0072, 0x2cca, 0x2ccd, 0xc000, 0x003c, 0x20d2, 0x0069, 0x0065, 0x003b,
    0xc000, 0x22b4, 0x20d2, 0x0100, 0x0041, 0x0074, 0x2cd8, 0x2cdc, 0x0072, 0x0072, 0x003b, 0x6903,
    0x0072, 0x0069, 0x0065, 0x003b, 0xc000, 0x22b5, 0x20d2, 0x0069, 0x006d, 0x003b, 0xc000, 0x223c,
    0x20d2, 0x0180, 0x0041, 0x0061, 0x006e, 0x2cf0, 0x2cf4, 0x2d02, 0x0072, 0x0072, 0x003b, 0x61d6,
    0x0072, 0x0100, 0x0068, 0x0072, 0x2cfa, 0x2cfd, 0x006b, 0x003b, 0x6923, 0x0100, 0x003b, 0x006f,
    0x13e7, 0x13e5, 0x0065, 0x0061, 0x0072, 0x003b, 0x6927, 0x1253, 0x1a95, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x2d2d, 0x0000,
    0x2d38, 0x2d48, 0x2d60, 0x2d65, 0x2d72, 0x2d84, 0x1b07, 0x0000, 0x0000, 0x2d8d, 0x2dab, 0x0000,
    0x2dc8, 0x2dce, 0x0000, 0x2ddc, 0x2e19, 0x2e2b, 0x2e3e, 0x2e43, 0x0100, 0x0063, 0x0073, 0x2d31,
    0x1a97, 0x0075, 0x0074, 0x0065, 0x803b, 0x00f3, 0x40f3, 0x0100, 0x0069, 0x0079, 0x2d3c, 0x2d45,
    0x0072, 0x0100, 0x003b, 0x0063, 0x1a9e, 0x2d42, 0x803b, 0x00f4, 0x40f4, 0x003b, 0x443e, 0x0280,
    0x0061, 0x0062, 0x0069, 0x006f, 0x0073, 0x1aa0, 0x2d52, 0x2d57, 0x01c8, 0x2d5a, 0x006c, 0x0061,
    0x0063, 0x003b, 0x4151, 0x0076, 0x003b, 0x6a38, 0x006f, 0x006c, 0x0064, 0x003b, 0x69bc, 0x006c,
    0x0069, 0x0067, 0x003b, 0x4153, 0x0100, 0x0063, 0x0072, 0x2d69, 0x2d6d, 0x0069, 0x0072, 0x003b,
    0x69bf, 0x003b, 0xc000, 0xd835, 0xdd2c, 0x036f, 0x2d79, 0x0000, 0x0000, 0x2d7c, 0x0000, 0x2d82,
    0x006e, 0x003b, 0x42db, 0x0061, 0x0076, 0x0065, 0x803b, 0x00f2, 0x40f2, 0x003b, 0x69c1, 0x0100,
    0x0062, 0x006d, 0x2d88, 0x0df4, 0x0061, 0x0072, 0x003b, 0x69b5, 0x0200, 0x0061, 0x0063, 0x0069,
    0x0074, 0x2d95, 0x2d98, 0x2da5, 0x2da8, 0x0072, 0x00f2, 0x1a80, 0x0100, 0x0069, 0x0072, 0x2d9d,
    0x2da0, 0x0072, 0x003b, 0x69be, 0x006f, 0x0073, 0x0073, 0x003b, 0x69bb, 0x006e, 0x00e5, 0x0e52,
    0x003b, 0x69c0, 0x0180, 0x0061, 0x0065, 0x0069, 0x2db1, 0x2db5, 0x2db9, 0x0063, 0x0072, 0x003b,
    0x414d, 0x0067, 0x0061, 0x003b, 0x43c9, 0x0180, 0x0063, 0x0064, 0x006e, 0x2dc0, 0x2dc5, 0x01cd,
    0x0072, 0x006f, 0x006e, 0x003b, 0x43bf, 0x003b, 0x69b6, 0x0070, 0x0066, 0x003b, 0xc000, 0xd835,
    0xdd60, 0x0180, 0x0061, 0x0065, 0x006c, 0x2dd4, 0x2dd7, 0x01d2, 0x0072, 0x003b, 0x69b7, 0x0072,
    0x0070, 0x003b, 0x69b9, 0x0380, 0x003b, 0x0061, 0x0064, 0x0069, 0x006f, 0x0073, 0x0076, 0x2dea,
    0x2deb, 0x2dee, 0x2e08, 0x2e0d, 0x2e10, 0x2e16, 0x6228, 0x0072, 0x00f2, 0x1a86, 0x0200, 0x003b,
    0x0065, 0x0066, 0x006d, 0x2df7, 0x2df8, 0x2e02, 0x2e05, 0x6a5d, 0x0072, 0x0100, 0x003b, 0x006f,
    0x2dfe, 0x2dff, 0x6134, 0x0066, 0x00bb, 0x2dff, 0x803b, 0x00aa, 0x40aa, 0x803b, 0x00ba, 0x40ba,
    0x0067, 0x006f, 0x0066, 0x003b, 0x62b6, 0x0072, 0x003b, 0x6a56, 0x006c, 0x006f, 0x0070, 0x0065,
    0x003b, 0x6a57, 0x003b, 0x6a5b, 0x0180, 0x0063, 0x006c, 0x006f, 0x2e1f, 0x2e21, 0x2e27, 0x00f2,
    0x2e01, 0x0061, 0x0073, 0x0068, 0x803b, 0x00f8, 0x40f8, 0x006c, 0x003b, 0x6298, 0x0069, 0x016c,
    0x2e2f, 0x2e34, 0x0064, 0x0065, 0x803b, 0x00f5, 0x40f5, 0x0065, 0x0073, 0x0100, 0x003b, 0x0061,
    0x01db, 0x2e3a, 0x0073, 0x003b, 0x6a36, 0x006d, 0x006c, 0x803b, 0x00f6, 0x40f6, 0x0062, 0x0061,
    0x0072, 0x003b, 0x633d, 0x0ae1, 0x2e5e, 0x0000, 0x2e7d, 0x0000, 0x2e80, 0x2e9d, 0x0000, 0x2ea2,
    0x2eb9, 0x0000, 0x0000, 0x2ecb, 0x0e9c, 0x0000, 0x2f13, 0x0000, 0x0000, 0x2f2b, 0x2fbc, 0x0000,
    0x2fc8, 0x0072, 0x0200, 0x003b, 0x0061, 0x0073, 0x0074, 0x0403, 0x2e67, 0x2e72, 0x0e85, 0x8100,
    0x00b6, 0x003b, 0x006c, 0x2e6d, 0x2e6e, 0x40b6, 0x006c, 0x0065, 0x00ec, 0x0403, 0x0269, 0x2e78,
    0x0000, 0x0000, 0x2e7b, 0x006d, 0x003b, 0x6af3, 0x003b, 0x6afd, 0x0079, 0x003b, 0x443f, 0x0072,
    0x0280, 0x0063, 0x0069, 0x006d, 0x0070, 0x0074, 0x2e8b, 0x2e8f, 0x2e93, 0x1865, 0x2e97, 0x006e,
    0x0074, 0x003b, 0x4025, 0x006f, 0x0064, 0x003b, 0x402e, 0x0069, 0x006c, 0x003b, 0x6030, 0x0065,
    0x006e, 0x006b, 0x003b, 0x6031, 0x0072, 0x003b, 0xc000, 0xd835, 0xdd2d, 0x0180, 0x0069, 0x006d,
    0x006f, 0x2ea8, 0x2eb0, 0x2eb4, 0x0100, 0x003b, 0x0076, 0x2ead, 0x2eae, 0x43c6, 0x003b, 0x43d5,
    0x006d, 0x0061, 0x00f4, 0x0a76, 0x006e, 0x0065, 0x003b, 0x660e, 0x0180, 0x003b, 0x0074, 0x0076,
    0x2ebf, 0x2ec0, 0x2ec8, 0x43c0, 0x0063, 0x0068, 0x0066, 0x006f, 0x0072, 0x006b, 0x00bb, 0x1ffd,
    0x003b, 0x43d6, 0x0100, 0x0061, 0x0075, 0x2ecf, 0x2edf, 0x006e, 0x0100, 0x0063, 0x006b, 0x2ed5,
    0x2edd, 0x006b, 0x0100, 0x003b, 0x0068, 0x21f4, 0x2edb, 0x003b, 0x610e, 0x00f6, 0x21f4, 0x0073,
    0x0480, 0x003b, 0x0061, 0x0062, 0x0063, 0x0064, 0x0065, 0x006d, 0x0073, 0x0074, 0x2ef3, 0x2ef4,
    0x1908, 0x2ef9, 0x2efd, 0x2f04, 0x2f06, 0x2f0a, 0x2f0e, 0x402b, 0x0063, 0x0069, 0x0072, 0x003b,
    0x6a23, 0x0069, 0x0072, 0x003b, 0x6a22, 0x0100, 0x006f, 0x0075, 0x1d40, 0x2f02, 0x003b, 0x6a25,
    0x003b, 0x6a72, 0x006e, 0x80bb, 0x00b1, 0x0e9d, 0x0069, 0x006d, 0x003b, 0x6a26, 0x0077, 0x006f,
    0x003b, 0x6a27, 0x0180, 0x0069, 0x0070, 0x0075, 0x2f19, 0x2f20, 0x2f25, 0x006e, 0x0074, 0x0069,
    0x006e, 0x0074, 0x003b, 0x6a15, 0x0066, 0x003b, 0xc000, 0xd835, 0xdd61, 0x006e, 0x0064, 0x803b,
    0x00a3, 0x40a3, 0x0500, 0x003b, 0x0045, 0x0061, 0x0063, 0x0065, 0x0069, 0x006e, 0x006f, 0x0073,
    0x0075, 0x0ec8, 0x2f3f, 0x2f41, 0x2f44, 0x2f47, 0x2f81, 0x2f89, 0x2f92, 0x2f7e, 0x2fb6, 0x003b,
    0x6ab3, 0x0070, 0x003b, 0x6ab7, 0x0075, 0x00e5, 0x0ed9, 0x0100, 0x003b, 0x0063, 0x0ece, 0x2f4c,
    0x0300, 0x003b, 0x0061, 0x0063, 0x0065, 0x006e, 0x0073, 0x0ec8, 0x2f59, 0x2f5f, 0x2f66, 0x2f68,
    0x2f7e, 0x0070, 0x0070, 0x0072, 0x006f, 0x00f8, 0x2f43, 0x0075, 0x0072, 0x006c, 0x0079, 0x0065,
    0x00f1, 0x0ed9, 0x00f1, 0x0ece, 0x0180, 0x0061, 0x0065, 0x0073, 0x2f6f, 0x2f76, 0x2f7a, 0x0070,
    0x0070, 0x0072, 0x006f, 0x0078, 0x003b, 0x6ab9, 0x0071, 0x0071, 0x003b, 0x6ab5, 0x0069, 0x006d,
    0x003b, 0x62e8, 0x0069, 0x00ed, 0x0edf, 0x006d, 0x0065, 0x0100, 0x003b, 0x0073, 0x2f88, 0x0eae,
    0x6032, 0x0180, 0x0045, 0x0061, 0x0073, 0x2f78, 0x2f90, 0x2f7a, 0x00f0, 0x2f75, 0x0180, 0x0064,
    0x0066, 0x0070, 0x0eec, 0x2f99, 0x2faf, 0x0180, 0x0061, 0x006c, 0x0073, 0x2fa0, 0x2fa5, 0x2faa,
    0x006c, 0x0061, 0x0072, 0x003b, 0x632e, 0x0069, 0x006e, 0x0065, 0x003b, 0x6312, 0x0075, 0x0072,
    0x0066, 0x003b, 0x6313, 0x0100, 0x003b, 0x0074, 0x0efb, 0x2fb4, 0x00ef, 0x0efb, 0x0072, 0x0065,
    0x006c, 0x003b, 0x62b0, 0x0100, 0x0063, 0x0069, 0x2fc0, 0x2fc5, 0x0072, 0x003b, 0xc000, 0xd835,
    0xdcc5, 0x003b, 0x43c8, 0x006e, 0x0063, 0x0073, 0x0070, 0x003b, 0x6008, 0x0300, 0x0066, 0x0069,
    0x006f, 0x0070, 0x0073, 0x0075, 0x2fda, 0x22e2, 0x2fdf, 0x2fe5, 0x2feb, 0x2ff1, 0x0072, 0x003b,
    0xc000, 0xd835, 0xdd2e, 0x0070, 0x0066, 0x003b, 0xc000, 0xd835, 0xdd62, 0x0072, 0x0069, 0x006d,
    0x0065, 0x003b, 0x6057, 0x0063, 0x0072, 0x003b, 0xc000, 0xd835, 0xdcc6, 0x0180, 0x0061, 0x0065,
    0x006f, 0x2ff8, 0x3009, 0x3013, 0x0074, 0x0100, 0x0065, 0x0069, 0x2ffe, 0x3005, 0x0072, 0x006e,
    0x0069, 0x006f, 0x006e, 0x00f3, 0x06b0, 0x006e, 0x0074, 0x003b, 0x6a16, 0x0073, 0x0074, 0x0100,
    0x003b, 0x0065, 0x3010, 0x3011, 0x403f, 0x00f1, 0x1f19, 0x00f4, 0x0f14, 0x0a80, 0x0041, 0x0042,
    0x0048, 0x0061, 0x0062, 0x0063, 0x0064, 0x0065, 0x0066, 0x0068, 0x0069, 0x006c, 0x006d, 0x006e,
    0x006f, 0x0070, 0x0072, 0x0073, 0x0074, 0x0075, 0x0078, 0x3040, 0x3051, 0x3055, 0x3059, 0x30e0,
    0x310e, 0x312b, 0x3147, 0x3162, 0x3172, 0x318e, 0x3206, 0x3215, 0x3224, 0x3229, 0x3258, 0x326e,
    0x3272, 0x3290, 0x32b0, 0x32b7, 0x0180, 0x0061, 0x0072, 0x0074, 0x3047, 0x304a, 0x304c, 0x0072,
    0x00f2, 0x10b3, 0x00f2, 0x03dd, 0x0061, 0x0069, 0x006c, 0x003b, 0x691c, 0x0061, 0x0072, 0x00f2,
    0x1c65, 0x0061, 0x0072, 0x003b, 0x6964, 0x0380, 0x0063, 0x0064, 0x0065, 0x006e, 0x0071, 0x0072,
    0x0074, 0x3068, 0x3075, 0x3078, 0x307f, 0x308f, 0x3094, 0x30cc, 0x0100, 0x0065, 0x0075, 0x306d,
    0x3071, 0x003b, 0xc000, 0x223d, 0x0331, 0x0074, 0x0065, 0x003b, 0x4155, 0x0069, 0x00e3, 0x116e,
    0x006d, 0x0070, 0x0074, 0x0079, 0x0076, 0x003b, 0x69b3, 0x0067, 0x0200, 0x003b, 0x0064, 0x0065,
    0x006c, 0x0fd1, 0x3089, 0x308b, 0x308d, 0x003b, 0x6992, 0x003b, 0x69a5, 0x00e5, 0x0fd1, 0x0075,
    0x006f, 0x803b, 0x00bb, 0x40bb, 0x0072, 0x0580, 0x003b, 0x0061, 0x0062, 0x0063, 0x0066, 0x0068,
    0x006c, 0x0070, 0x0073, 0x0074, 0x0077, 0x0fdc, 0x30ac, 0x30af, 0x30b7, 0x30b9, 0x30bc, 0x30be,
    0x30c0, 0x30c3, 0x30c7, 0x30ca, 0x0070, 0x003b, 0x6975, 0x0100, 0x003b, 0x0066, 0x0fe0, 0x30b4,
    0x0073, 0x003b, 0x6920, 0x003b, 0x6933, 0x0073, 0x003b, 0x691e, 0x00eb, 0x225d, 0x00f0, 0x272e,
    0x006c, 0x003b, 0x6945, 0x0069, 0x006d, 0x003b, 0x6974, 0x006c, 0x003b, 0x61a3, 0x003b, 0x619d,
    0x0100, 0x0061, 0x0069, 0x30d1, 0x30d5, 0x0069, 0x006c, 0x003b, 0x691a, 0x006f, 0x0100, 0x003b,
    0x006e, 0x30db, 0x30dc, 0x6236, 0x0061, 0x006c, 0x00f3, 0x0f1e, 0x0180, 0x0061, 0x0062, 0x0072,
    0x30e7, 0x30ea, 0x30ee, 0x0072, 0x00f2, 0x17e5, 0x0072, 0x006b, 0x003b, 0x6773, 0x0100, 0x0061,
    0x006b, 0x30f3, 0x30fd, 0x0063, 0x0100, 0x0065, 0x006b, 0x30f9, 0x30fb, 0x003b, 0x407d, 0x003b,
    0x405d, 0x0100, 0x0065, 0x0073, 0x3102, 0x3104, 0x003b, 0x698c, 0x006c, 0x0100, 0x0064, 0x0075,
    0x310a, 0x310c, 0x003b, 0x698e, 0x003b, 0x6990, 0x0200, 0x0061, 0x0065, 0x0075, 0x0079, 0x3117,
    0x311c, 0x3127, 0x3129, 0x0072, 0x006f, 0x006e, 0x003b, 0x4159, 0x0100, 0x0064, 0x0069, 0x3121,
    0x3125, 0x0069, 0x006c, 0x003b, 0x4157, 0x00ec, 0x0ff2, 0x00e2, 0x30fa, 0x003b, 0x4440, 0x0200,
    0x0063, 0x006c, 0x0071, 0x0073, 0x3134, 0x3137, 0x313d, 0x3144, 0x0061, 0x003b, 0x6937, 0x0064,
    0x0068, 0x0061, 0x0072, 0x003b, 0x6969, 0x0075, 0x006f, 0x0100, 0x003b, 0x0072, 0x020e, 0x020d,
    0x0068, 0x003b, 0x61b3, 0x0180, 0x0061, 0x0063, 0x0067, 0x314e, 0x315f, 0x0f44, 0x006c, 0x0200,
    0x003b, 0x0069, 0x0070, 0x0073, 0x0f78, 0x3158, 0x315b, 0x109c, 0x006e, 0x00e5, 0x10bb, 0x0061,
    0x0072, 0x00f4, 0x0fa9, 0x0074, 0x003b, 0x65ad, 0x0180, 0x0069, 0x006c, 0x0072, 0x3169, 0x1023,
    0x316e, 0x0073, 0x0068, 0x0074, 0x003b, 0x697d, 0x003b, 0xc000, 0xd835, 0xdd2f, 0x0100, 0x0061,
    0x006f, 0x3177, 0x3186, 0x0072, 0x0100, 0x0064, 0x0075, 0x317d, 0x317f, 0x00bb, 0x047b, 0x0100,
    0x003b, 0x006c, 0x1091, 0x3184, 0x003b, 0x696c, 0x0100, 0x003b, 0x0076, 0x318b, 0x318c, 0x43c1,
    0x003b, 0x43f1, 0x0180, 0x0067, 0x006e, 0x0073, 0x3195, 0x31f9, 0x31fc, 0x0068, 0x0074, 0x0300,
    0x0061, 0x0068, 0x006c, 0x0072, 0x0073, 0x0074, 0x31a4, 0x31b0, 0x31c2, 0x31d8, 0x31e4, 0x31ee,
    0x0072, 0x0072, 0x006f, 0x0077, 0x0100, 0x003b, 0x0074, 0x0fdc, 0x31ad, 0x0061, 0x00e9, 0x30c8,
    0x0061, 0x0072, 0x0070, 0x006f, 0x006f, 0x006e, 0x0100, 0x0064, 0x0075, 0x31bb, 0x31bf, 0x006f,
    0x0077, 0x00ee, 0x317e, 0x0070, 0x00bb, 0x1092, 0x0065, 0x0066, 0x0074, 0x0100, 0x0061, 0x0068,
    0x31ca, 0x31d0, 0x0072, 0x0072, 0x006f, 0x0077, 0x00f3, 0x0fea, 0x0061, 0x0072, 0x0070, 0x006f,
    0x006f, 0x006e, 0x00f3, 0x0551, 0x0069, 0x0067, 0x0068, 0x0074, 0x0061, 0x0072, 0x0072, 0x006f,
    0x0077, 0x0073, 0x003b, 0x61c9, 0x0071, 0x0075, 0x0069, 0x0067, 0x0061, 0x0072, 0x0072, 0x006f,
    0x00f7, 0x30cb, 0x0068, 0x0072, 0x0065, 0x0065, 0x0074, 0x0069, 0x006d, 0x0065, 0x0073, 0x003b,
    0x62cc, 0x0067, 0x003b, 0x42da, 0x0069, 0x006e, 0x0067, 0x0064, 0x006f, 0x0074, 0x0073, 0x0065,
    0x00f1, 0x1f32, 0x0180, 0x0061, 0x0068, 0x006d, 0x320d, 0x3210, 0x3213, 0x0072, 0x00f2, 0x0fea,
    0x0061, 0x00f2, 0x0551, 0x003b, 0x600f, 0x006f, 0x0075, 0x0073, 0x0074, 0x0100, 0x003b, 0x0061,
    0x321e, 0x321f, 0x63b1, 0x0063, 0x0068, 0x0065, 0x00bb, 0x321f, 0x006d, 0x0069, 0x0064, 0x003b,
    0x6aee, 0x0200, 0x0061, 0x0062, 0x0070, 0x0074, 0x3232, 0x323d, 0x3240, 0x3252, 0x0100, 0x006e,
    0x0072, 0x3237, 0x323a, 0x0067, 0x003b, 0x67ed, 0x0072, 0x003b, 0x61fe, 0x0072, 0x00eb, 0x1003,
    0x0180, 0x0061, 0x0066, 0x006c, 0x3247, 0x324a, 0x324e, 0x0072, 0x003b, 0x6986, 0x003b, 0xc000,
    0xd835, 0xdd63, 0x0075, 0x0073, 0x003b, 0x6a2e, 0x0069, 0x006d, 0x0065, 0x0073, 0x003b, 0x6a35,
    0x0100, 0x0061, 0x0070, 0x325d, 0x3267, 0x0072, 0x0100, 0x003b, 0x0067, 0x3263, 0x3264, 0x4029,
    0x0074, 0x003b, 0x6994, 0x006f, 0x006c, 0x0069, 0x006e, 0x0074, 0x003b, 0x6a12, 0x0061, 0x0072,
    0x00f2, 0x31e3, 0x0200, 0x0061, 0x0063, 0x0068, 0x0071, 0x327b, 0x3280, 0x10bc, 0x3285, 0x0071,
    0x0075, 0x006f, 0x003b, 0x603a, 0x0072, 0x003b, 0xc000, 0xd835, 0xdcc7, 0x0100, 0x0062, 0x0075,
    0x30fb, 0x328a, 0x006f, 0x0100, 0x003b, 0x0072, 0x0214, 0x0213, 0x0180, 0x0068, 0x0069, 0x0072,
    0x3297, 0x329b, 0x32a0, 0x0072, 0x0065, 0x00e5, 0x31f8, 0x006d, 0x0065, 0x0073, 0x003b, 0x62ca,
    0x0069, 0x0200, 0x003b, 0x0065, 0x0066, 0x006c, 0x32aa, 0x1059, 0x1821, 0x32ab, 0x65b9, 0x0074,
    0x0072, 0x0069, 0x003b, 0x69ce, 0x006c, 0x0075, 0x0068, 0x0061, 0x0072, 0x003b, 0x6968, 0x003b,
    0x611e, 0x0d61, 0x32d5, 0x32db, 0x32df, 0x332c, 0x3338, 0x3371, 0x0000, 0x337a, 0x33a4, 0x0000,
    0x0000, 0x33ec, 0x33f0, 0x0000, 0x3428, 0x3448, 0x345a, 0x34ad, 0x34b1, 0x34ca, 0x34f1, 0x0000,
    0x3616, 0x0000, 0x0000, 0x3633, 0x0063, 0x0075, 0x0074, 0x0065, 0x003b, 0x415b, 0x0071, 0x0075,
    0x00ef, 0x27ba, 0x0500, 0x003b, 0x0045, 0x0061, 0x0063, 0x0065, 0x0069, 0x006e, 0x0070, 0x0073,
    0x0079, 0x11ed, 0x32f3, 0x32f5, 0x32ff, 0x3302, 0x330b, 0x330f, 0x331f, 0x3326, 0x3329, 0x003b,
    0x6ab4, 0x01f0, 0x32fa, 0x0000, 0x32fc, 0x003b, 0x6ab8, 0x006f, 0x006e, 0x003b, 0x4161, 0x0075,
    0x00e5, 0x11fe, 0x0100, 0x003b, 0x0064, 0x11f3, 0x3307, 0x0069, 0x006c, 0x003b, 0x415f, 0x0072,
    0x0063, 0x003b, 0x415d, 0x0180, 0x0045, 0x0061, 0x0073, 0x3316, 0x3318, 0x331b, 0x003b, 0x6ab6,
    0x0070, 0x003b, 0x6aba, 0x0069, 0x006d, 0x003b, 0x62e9, 0x006f, 0x006c, 0x0069, 0x006e, 0x0074,
    0x003b, 0x6a13, 0x0069, 0x00ed, 0x1204, 0x003b, 0x4441, 0x006f, 0x0074, 0x0180, 0x003b, 0x0062,
    0x0065, 0x3334, 0x1d47, 0x3335, 0x62c5, 0x003b, 0x6a66, 0x0380, 0x0041, 0x0061, 0x0063, 0x006d,
    0x0073, 0x0074, 0x0078, 0x3346, 0x334a, 0x3357, 0x335b, 0x335e, 0x3363, 0x336d, 0x0072, 0x0072,
    0x003b, 0x61d8, 0x0072, 0x0100, 0x0068, 0x0072, 0x3350, 0x3352, 0x00eb, 0x2228, 0x0100, 0x003b,
    0x006f, 0x0a36, 0x0a34, 0x0074, 0x803b, 0x00a7, 0x40a7, 0x0069, 0x003b, 0x403b, 0x0077, 0x0061,
    0x0072, 0x003b, 0x6929, 0x006d, 0x0100, 0x0069, 0x006e, 0x3369, 0x00f0, 0x006e, 0x0075, 0x00f3,
    0x00f1, 0x0074, 0x003b, 0x6736, 0x0072, 0x0100, 0x003b, 0x006f, 0x3376, 0x2055, 0xc000, 0xd835,
    0xdd30, 0x0200, 0x0061, 0x0063, 0x006f, 0x0079, 0x3382, 0x3386, 0x3391, 0x33a0, 0x0072, 0x0070,
    0x003b, 0x666f, 0x0100, 0x0068, 0x0079, 0x338b, 0x338f, 0x0063, 0x0079, 0x003b, 0x4449, 0x003b,
    0x4448, 0x0072, 0x0074, 0x026d, 0x3399, 0x0000, 0x0000, 0x339c, 0x0069, 0x00e4, 0x1464, 0x0061,
    0x0072, 0x0061, 0x00ec, 0x2e6f, 0x803b, 0x00ad, 0x40ad, 0x0100, 0x0067, 0x006d, 0x33a8, 0x33b4,
    0x006d, 0x0061, 0x0180, 0x003b, 0x0066, 0x0076, 0x33b1, 0x33b2, 0x33b2, 0x43c3, 0x003b, 0x43c2,
    0x0400, 0x003b, 0x0064, 0x0065, 0x0067, 0x006c, 0x006e, 0x0070, 0x0072, 0x12ab, 0x33c5, 0x33c9,
    0x33ce, 0x33d6, 0x33de, 0x33e1, 0x33e6, 0x006f, 0x0074, 0x003b, 0x6a6a, 0x0100, 0x003b, 0x0071,
    0x12b1, 0x12b0, 0x0100, 0x003b, 0x0045, 0x33d3, 0x33d4, 0x6a9e, 0x003b, 0x6aa0, 0x0100, 0x003b,
    0x0045, 0x33db, 0x33dc, 0x6a9d, 0x003b, 0x6a9f, 0x0065, 0x003b, 0x6246, 0x006c, 0x0075, 0x0073,
    0x003b, 0x6a24, 0x0061, 0x0072, 0x0072, 0x003b, 0x6972, 0x0061, 0x0072, 0x00f2, 0x113d, 0x0200,
    0x0061, 0x0065, 0x0069, 0x0074, 0x33f8, 0x3408, 0x340f, 0x3417, 0x0100, 0x006c, 0x0073, 0x33fd,
    0x3404, 0x006c, 0x0073, 0x0065, 0x0074, 0x006d, 0x00e9, 0x336a, 0x0068, 0x0070, 0x003b, 0x6a33,
    0x0070, 0x0061, 0x0072, 0x0073, 0x006c, 0x003b, 0x69e4, 0x0100, 0x0064, 0x006c, 0x1463, 0x3414,
    0x0065, 0x003b, 0x6323, 0x0100, 0x003b, 0x0065, 0x341c, 0x341d, 0x6aaa, 0x0100, 0x003b, 0x0073,
    0x3422, 0x3423, 0x6aac, 0x003b, 0xc000, 0x2aac, 0xfe00, 0x0180, 0x0066, 0x006c, 0x0070, 0x342e,
    0x3433, 0x3442, 0x0074, 0x0063, 0x0079, 0x003b, 0x444c, 0x0100, 0x003b, 0x0062, 0x3438, 0x3439,
    0x402f, 0x0100, 0x003b, 0x0061, 0x343e, 0x343f, 0x69c4, 0x0072, 0x003b, 0x633f, 0x0066, 0x003b,
    0xc000, 0xd835, 0xdd64, 0x0061, 0x0100, 0x0064, 0x0072, 0x344d, 0x0402, 0x0065, 0x0073, 0x0100,
    0x003b, 0x0075, 0x3454, 0x3455, 0x6660, 0x0069, 0x0074, 0x00bb, 0x3455, 0x0180, 0x0063, 0x0073,
    0x0075, 0x3460, 0x3479, 0x349f, 0x0100, 0x0061, 0x0075, 0x3465, 0x346f, 0x0070, 0x0100, 0x003b,
    0x0073, 0x1188, 0x346b, 0x003b, 0xc000, 0x2293, 0xfe00, 0x0070, 0x0100, 0x003b, 0x0073, 0x11b4,
    0x3475, 0x003b, 0xc000, 0x2294, 0xfe00, 0x0075, 0x0100, 0x0062, 0x0070, 0x347f, 0x348f, 0x0180,
    0x003b, 0x0065, 0x0073, 0x1197, 0x119c, 0x3486, 0x0065, 0x0074, 0x0100, 0x003b, 0x0065, 0x1197,
    0x348d, 0x00f1, 0x119d, 0x0180, 0x003b, 0x0065, 0x0073, 0x11a8, 0x11ad, 0x3496, 0x0065, 0x0074,
    0x0100, 0x003b, 0x0065, 0x11a8, 0x349d, 0x00f1, 0x11ae, 0x0180, 0x003b, 0x0061, 0x0066, 0x117b,
    0x34a6, 0x05b0, 0x0072, 0x0165, 0x34ab, 0x05b1, 0x00bb, 0x117c, 0x0061, 0x0072, 0x00f2, 0x1148,
    0x0200, 0x0063, 0x0065, 0x006d, 0x0074, 0x34b9, 0x34be, 0x34c2, 0x34c5, 0x0072, 0x003b, 0xc000,
    0xd835, 0xdcc8, 0x0074, 0x006d, 0x00ee, 0x00f1, 0x0069, 0x00ec, 0x3415, 0x0061, 0x0072, 0x00e6,
    0x11be, 0x0100, 0x0061, 0x0072, 0x34ce, 0x34d5, 0x0072, 0x0100, 0x003b, 0x0066, 0x34d4, 0x17bf,
    0x6606, 0x0100, 0x0061, 0x006e, 0x34da, 0x34ed, 0x0069, 0x0067, 0x0068, 0x0074, 0x0100, 0x0065,
    0x0070, 0x34e3, 0x34ea, 0x0070, 0x0073, 0x0069, 0x006c, 0x006f, 0x00ee, 0x1ee0, 0x0068, 0x00e9,
    0x2eaf, 0x0073, 0x00bb, 0x2852, 0x0280, 0x0062, 0x0063, 0x006d, 0x006e, 0x0070, 0x34fb, 0x355e,
    0x1209, 0x358b, 0x358e, 0x0480, 0x003b, 0x0045, 0x0064, 0x0065, 0x006d, 0x006e, 0x0070, 0x0072,
    0x0073, 0x350e, 0x350f, 0x3511, 0x3515, 0x351e, 0x3523, 0x352c, 0x3531, 0x3536, 0x6282, 0x003b,
    0x6ac5, 0x006f, 0x0074, 0x003b, 0x6abd, 0x0100, 0x003b, 0x0064, 0x11da, 0x351a, 0x006f, 0x0074,
    0x003b, 0x6ac3, 0x0075, 0x006c, 0x0074, 0x003b, 0x6ac1, 0x0100, 0x0045, 0x0065, 0x3528, 0x352a,
    0x003b, 0x6acb, 0x003b, 0x628a, 0x006c, 0x0075, 0x0073, 0x003b, 0x6abf, 0x0061, 0x0072, 0x0072,
    0x003b, 0x6979, 0x0180, 0x0065, 0x0069, 0x0075, 0x353d, 0x3552, 0x3555, 0x0074, 0x0180, 0x003b,
    0x0065, 0x006e, 0x350e, 0x3545, 0x354b, 0x0071, 0x0100, 0x003b, 0x0071, 0x11da, 0x350f, 0x0065,
    0x0071, 0x0100, 0x003b, 0x0071, 0x352b, 0x3528, 0x006d, 0x003b, 0x6ac7, 0x0100, 0x0062, 0x0070,
    0x355a, 0x355c, 0x003b, 0x6ad5, 0x003b, 0x6ad3, 0x0063, 0x0300, 0x003b, 0x0061, 0x0063, 0x0065,
    0x006e, 0x0073, 0x11ed, 0x356c, 0x3572, 0x3579, 0x357b, 0x3326, 0x0070, 0x0070, 0x0072, 0x006f,
    0x00f8, 0x32fa, 0x0075, 0x0072, 0x006c, 0x0079, 0x0065, 0x00f1, 0x11fe, 0x00f1, 0x11f3, 0x0180,
    0x0061, 0x0065, 0x0073, 0x3582, 0x3588, 0x331b, 0x0070, 0x0070, 0x0072, 0x006f, 0x00f8, 0x331a,
    0x0071, 0x00f1, 0x3317, 0x0067, 0x003b, 0x666a, 0x0680, 0x0031, 0x0032, 0x0033, 0x003b, 0x0045,
    0x0064, 0x0065, 0x0068, 0x006c, 0x006d, 0x006e, 0x0070, 0x0073, 0x35a9, 0x35ac, 0x35af, 0x121c,
    0x35b2, 0x35b4, 0x35c0, 0x35c9, 0x35d5, 0x35da, 0x35df, 0x35e8, 0x35ed, 0x803b, 0x00b9, 0x40b9,
    0x803b, 0x00b2, 0x40b2, 0x803b, 0x00b3, 0x40b3, 0x003b, 0x6ac6, 0x0100, 0x006f, 0x0073, 0x35b9,
    0x35bc, 0x0074, 0x003b, 0x6abe, 0x0075, 0x0062, 0x003b, 0x6ad8, 0x0100, 0x003b, 0x0064, 0x1222,
    0x35c5, 0x006f, 0x0074, 0x003b, 0x6ac4, 0x0073, 0x0100, 0x006f, 0x0075, 0x35cf, 0x35d2, 0x006c,
    0x003b, 0x67c9, 0x0062, 0x003b, 0x6ad7, 0x0061, 0x0072, 0x0072, 0x003b, 0x697b, 0x0075, 0x006c,
    0x0074, 0x003b, 0x6ac2, 0x0100, 0x0045, 0x0065, 0x35e4, 0x35e6, 0x003b, 0x6acc, 0x003b, 0x628b,
    0x006c, 0x0075, 0x0073, 0x003b, 0x6ac0, 0x0180, 0x0065, 0x0069, 0x0075, 0x35f4, 0x3609, 0x360c,
    0x0074, 0x0180, 0x003b, 0x0065, 0x006e, 0x121c, 0x35fc, 0x3602, 0x0071, 0x0100, 0x003b, 0x0071,
    0x1222, 0x35b2, 0x0065, 0x0071, 0x0100, 0x003b, 0x0071, 0x35e7, 0x35e4, 0x006d, 0x003b, 0x6ac8,
    0x0100, 0x0062, 0x0070, 0x3611, 0x3613, 0x003b, 0x6ad4, 0x003b, 0x6ad6, 0x0180, 0x0041, 0x0061,
    0x006e, 0x361c, 0x3620, 0x362d, 0x0072, 0x0072, 0x003b, 0x61d9, 0x0072, 0x0100, 0x0068, 0x0072,
    0x3626, 0x3628, 0x00eb, 0x222e, 0x0100, 0x003b, 0x006f, 0x0a2b, 0x0a29, 0x0077, 0x0061, 0x0072,
    0x003b, 0x692a, 0x006c, 0x0069, 0x0067, 0x803b, 0x00df, 0x40df, 0x0be1, 0x3651, 0x365d, 0x3660,
    0x12ce, 0x3673, 0x3679, 0x0000, 0x367e, 0x36c2, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x36db,
    0x3703, 0x0000, 0x3709, 0x376c, 0x0000, 0x0000, 0x0000, 0x3787, 0x0272, 0x3656, 0x0000, 0x0000,
    0x365b, 0x0067, 0x0065, 0x0074, 0x003b, 0x6316, 0x003b, 0x43c4, 0x0072, 0x00eb, 0x0e5f, 0x0180,
    0x0061, 0x0065, 0x0079, 0x3666, 0x366b, 0x3670, 0x0072, 0x006f, 0x006e, 0x003b, 0x4165, 0x0064,
    0x0069, 0x006c, 0x003b, 0x4163, 0x003b, 0x4442, 0x006c, 0x0072, 0x0065, 0x0063, 0x003b, 0x6315,
    0x0072, 0x003b, 0xc000, 0xd835, 0xdd31, 0x0200, 0x0065, 0x0069, 0x006b, 0x006f, 0x3686, 0x369d,
    0x36b5, 0x36bc, 0x01f2, 0x368b, 0x0000, 0x3691, 0x0065, 0x0100, 0x0034, 0x0066, 0x1284, 0x1281,
    0x0061, 0x0180, 0x003b, 0x0073, 0x0076, 0x3698, 0x3699, 0x369b, 0x43b8, 0x0079, 0x006d, 0x003b,
    0x43d1, 0x0100, 0x0063, 0x006e, 0x36a2, 0x36b2, 0x006b, 0x0100, 0x0061, 0x0073, 0x36a8, 0x36ae,
    0x0070, 0x0070, 0x0072, 0x006f, 0x00f8, 0x12c1, 0x0069, 0x006d, 0x00bb, 0x12ac, 0x0073, 0x00f0,
    0x129e, 0x0100, 0x0061, 0x0073, 0x36ba, 0x36ae, 0x00f0, 0x12c1, 0x0072, 0x006e, 0x803b, 0x00fe,
    0x40fe, 0x01ec, 0x031f, 0x36c6, 0x22e7, 0x0065, 0x0073, 0x8180, 0x00d7, 0x003b, 0x0062, 0x0064,
    0x36cf, 0x36d0, 0x36d8, 0x40d7, 0x0100, 0x003b, 0x0061, 0x190f, 0x36d5, 0x0072, 0x003b, 0x6a31,
    0x003b, 0x6a30, 0x0180, 0x0065, 0x0070, 0x0073, 0x36e1, 0x36e3, 0x3700, 0x00e1, 0x2a4d, 0x0200,
    0x003b, 0x0062, 0x0063, 0x0066, 0x0486, 0x36ec, 0x36f0, 0x36f4, 0x006f, 0x0074, 0x003b, 0x6336,
    0x0069, 0x0072, 0x003b, 0x6af1, 0x0100, 0x003b, 0x006f, 0x36f9, 0x36fc, 0xc000, 0xd835, 0xdd65,
    0x0072, 0x006b, 0x003b, 0x6ada, 0x00e1, 0x3362, 0x0072, 0x0069, 0x006d, 0x0065, 0x003b, 0x6034,
    0x0180, 0x0061, 0x0069, 0x0070, 0x370f, 0x3712, 0x3764, 0x0064, 0x00e5, 0x1248, 0x0380, 0x0061,
    0x0064, 0x0065, 0x006d, 0x0070, 0x0073, 0x0074, 0x3721, 0x374d, 0x3740, 0x3751, 0x3757, 0x375c,
    0x375f, 0x006e, 0x0067, 0x006c, 0x0065, 0x0280, 0x003b, 0x0064, 0x006c, 0x0071, 0x0072, 0x3730,
    0x3731, 0x3736, 0x3740, 0x3742, 0x65b5, 0x006f, 0x0077, 0x006e, 0x00bb, 0x1dbb, 0x0065, 0x0066,
    0x0074, 0x0100, 0x003b, 0x0065, 0x2800, 0x373e, 0x00f1, 0x092e, 0x003b, 0x625c, 0x0069, 0x0067,
    0x0068, 0x0074, 0x0100, 0x003b, 0x0065, 0x32aa, 0x374b, 0x00f1, 0x105a, 0x006f, 0x0074, 0x003b,
    0x65ec, 0x0069, 0x006e, 0x0075, 0x0073, 0x003b, 0x6a3a, 0x006c, 0x0075, 0x0073, 0x003b, 0x6a39,
    0x0062, 0x003b, 0x69cd, 0x0069, 0x006d, 0x0065, 0x003b, 0x6a3b, 0x0065, 0x007a, 0x0069, 0x0075,
    0x006d, 0x003b, 0x63e2, 0x0180, 0x0063, 0x0068, 0x0074, 0x3772, 0x377d, 0x3781, 0x0100, 0x0072,
    0x0079, 0x3777, 0x377b, 0x003b, 0xc000, 0xd835, 0xdcc9, 0x003b, 0x4446, 0x0063, 0x0079, 0x003b,
    0x445b, 0x0072, 0x006f, 0x006b, 0x003b, 0x4167, 0x0100, 0x0069, 0x006f, 0x378b, 0x378e, 0x0078,
    0x00f4, 0x1777, 0x0068, 0x0065, 0x0061, 0x0064, 0x0100, 0x006c, 0x0072, 0x3797, 0x37a0, 0x0065,
    0x0066, 0x0074, 0x0061, 0x0072, 0x0072, 0x006f, 0x00f7, 0x084f, 0x0069, 0x0067, 0x0068, 0x0074,
    0x0061, 0x0072, 0x0072, 0x006f, 0x0077, 0x00bb, 0x0f5d, 0x0900, 0x0041, 0x0048, 0x0061, 0x0062,
    0x0063, 0x0064, 0x0066, 0x0067, 0x0068, 0x006c, 0x006d, 0x006f, 0x0070, 0x0072, 0x0073, 0x0074,
    0x0075, 0x0077, 0x37d0, 0x37d3, 0x37d7, 0x37e4, 0x37f0, 0x37fc, 0x380e, 0x381c, 0x3823, 0x3834,
    0x3851, 0x385d, 0x386b, 0x38a9, 0x38cc, 0x38d2, 0x38ea, 0x38f6, 0x0072, 0x00f2, 0x03ed, 0x0061,
    0x0072, 0x003b, 0x6963, 0x0100, 0x0063, 0x0072, 0x37dc, 0x37e2, 0x0075, 0x0074, 0x0065, 0x803b,
    0x00fa, 0x40fa, 0x00f2, 0x1150, 0x0072, 0x01e3, 0x37ea, 0x0000, 0x37ed, 0x0079, 0x003b, 0x445e,
    0x0076, 0x0065, 0x003b, 0x416d, 0x0100, 0x0069, 0x0079, 0x37f5, 0x37fa, 0x0072, 0x0063, 0x803b,
    0x00fb, 0x40fb, 0x003b, 0x4443, 0x0180, 0x0061, 0x0062, 0x0068, 0x3803, 0x3806, 0x380b, 0x0072,
    0x00f2, 0x13ad, 0x006c, 0x0061, 0x0063, 0x003b, 0x4171, 0x0061, 0x00f2, 0x13c3, 0x0100, 0x0069,
    0x0072, 0x3813, 0x3818, 0x0073, 0x0068, 0x0074, 0x003b, 0x697e, 0x003b, 0xc000, 0xd835, 0xdd32,
    0x0072, 0x0061, 0x0076, 0x0065, 0x803b, 0x00f9, 0x40f9, 0x0161, 0x3827, 0x3831, 0x0072, 0x0100,
    0x006c, 0x0072, 0x382c, 0x382e, 0x00bb, 0x0957, 0x00bb, 0x1083, 0x006c, 0x006b, 0x003b, 0x6580,
    0x0100, 0x0063, 0x0074, 0x3839, 0x384d, 0x026f, 0x383f, 0x0000, 0x0000, 0x384a, 0x0072, 0x006e,
    0x0100, 0x003b, 0x0065, 0x3845, 0x3846, 0x631c, 0x0072, 0x00bb, 0x3846, 0x006f, 0x0070, 0x003b,
    0x630f, 0x0072, 0x0069, 0x003b, 0x65f8, 0x0100, 0x0061, 0x006c, 0x3856, 0x385a, 0x0063, 0x0072,
    0x003b, 0x416b, 0x80bb, 0x00a8, 0x0349, 0x0100, 0x0067, 0x0070, 0x3862, 0x3866, 0x006f, 0x006e,
    0x003b, 0x4173, 0x0066, 0x003b, 0xc000, 0xd835, 0xdd66, 0x0300, 0x0061, 0x0064, 0x0068, 0x006c,
    0x0073, 0x0075, 0x114b, 0x3878, 0x387d, 0x1372, 0x3891, 0x38a0, 0x006f, 0x0077, 0x006e, 0x00e1,
    0x13b3, 0x0061, 0x0072, 0x0070, 0x006f, 0x006f, 0x006e, 0x0100, 0x006c, 0x0072, 0x3888, 0x388c,
    0x0065, 0x0066, 0x00f4, 0x382d, 0x0069, 0x0067, 0x0068, 0x00f4, 0x382f, 0x0069, 0x0180, 0x003b,
    0x0068, 0x006c, 0x3899, 0x389a, 0x389c, 0x43c5, 0x00bb, 0x13fa, 0x006f, 0x006e, 0x00bb, 0x389a,
    0x0070, 0x0061, 0x0072, 0x0072, 0x006f, 0x0077, 0x0073, 0x003b, 0x61c8, 0x0180, 0x0063, 0x0069,
    0x0074, 0x38b0, 0x38c4, 0x38c8, 0x026f, 0x38b6, 0x0000, 0x0000, 0x38c1, 0x0072, 0x006e, 0x0100,
    0x003b, 0x0065, 0x38bc, 0x38bd, 0x631d, 0x0072, 0x00bb, 0x38bd, 0x006f, 0x0070, 0x003b, 0x630e,
    0x006e, 0x0067, 0x003b, 0x416f, 0x0072, 0x0069, 0x003b, 0x65f9, 0x0063, 0x0072, 0x003b, 0xc000,
    0xd835, 0xdcca, 0x0180, 0x0064, 0x0069, 0x0072, 0x38d9, 0x38dd, 0x38e2, 0x006f, 0x0074, 0x003b,
    0x62f0, 0x006c, 0x0064, 0x0065, 0x003b, 0x4169, 0x0069, 0x0100, 0x003b, 0x0066, 0x3730, 0x38e8,
    0x00bb, 0x1813, 0x0100, 0x0061, 0x006d, 0x38ef, 0x38f2, 0x0072, 0x00f2, 0x38a8, 0x006c, 0x803b,
    0x00fc, 0x40fc, 0x0061, 0x006e, 0x0067, 0x006c, 0x0065, 0x003b, 0x69a7, 0x0780, 0x0041, 0x0042,
    0x0044, 0x0061, 0x0063, 0x0064, 0x0065, 0x0066, 0x006c, 0x006e, 0x006f, 0x0070, 0x0072, 0x0073,
    0x007a, 0x391c, 0x391f, 0x3929, 0x392d, 0x39b5, 0x39b8, 0x39bd, 0x39df, 0x39e4, 0x39e8, 0x39f3,
    0x39f9, 0x39fd, 0x3a01, 0x3a20, 0x0072, 0x00f2, 0x03f7, 0x0061, 0x0072, 0x0100, 0x003b, 0x0076,
    0x3926, 0x3927, 0x6ae8, 0x003b, 0x6ae9, 0x0061, 0x0073, 0x00e8, 0x03e1, 0x0100, 0x006e, 0x0072,
    0x3932, 0x3937, 0x0067, 0x0072, 0x0074, 0x003b, 0x699c, 0x0380, 0x0065, 0x006b, 0x006e, 0x0070,
    0x0072, 0x0073, 0x0074, 0x34e3, 0x3946, 0x394b, 0x3952, 0x395d, 0x3964, 0x3996, 0x0061, 0x0070,
    0x0070, 0x00e1, 0x2415, 0x006f, 0x0074, 0x0068, 0x0069, 0x006e, 0x00e7, 0x1e96, 0x0180, 0x0068,
    0x0069, 0x0072, 0x34eb, 0x2ec8, 0x3959, 0x006f, 0x0070, 0x00f4, 0x2fb5, 0x0100, 0x003b, 0x0068,
    0x13b7, 0x3962, 0x00ef, 0x318d, 0x0100, 0x0069, 0x0075, 0x3969, 0x396d, 0x0067, 0x006d, 0x00e1,
    0x33b3, 0x0100, 0x0062, 0x0070, 0x3972, 0x3984, 0x0073, 0x0065, 0x0074, 0x006e, 0x0065, 0x0071,
    0x0100, 0x003b, 0x0071, 0x397d, 0x3980, 0xc000, 0x228a, 0xfe00, 0x003b, 0xc000, 0x2acb, 0xfe00,
    0x0073, 0x0065, 0x0074, 0x006e, 0x0065, 0x0071, 0x0100, 0x003b, 0x0071, 0x398f, 0x3992, 0xc000,
    0x228b, 0xfe00, 0x003b, 0xc000, 0x2acc, 0xfe00, 0x0100, 0x0068, 0x0072, 0x399b, 0x399f, 0x0065,
    0x0074, 0x00e1, 0x369c, 0x0069, 0x0061, 0x006e, 0x0067, 0x006c, 0x0065, 0x0100, 0x006c, 0x0072,
    0x39aa, 0x39af, 0x0065, 0x0066, 0x0074, 0x00bb, 0x0925, 0x0069, 0x0067, 0x0068, 0x0074, 0x00bb,
    0x1051, 0x0079, 0x003b, 0x4432, 0x0061, 0x0073, 0x0068, 0x00bb, 0x1036, 0x0180, 0x0065, 0x006c,
    0x0072, 0x39c4, 0x39d2, 0x39d7, 0x0180, 0x003b, 0x0062, 0x0065, 0x2dea, 0x39cb, 0x39cf, 0x0061,
    0x0072, 0x003b, 0x62bb, 0x0071, 0x003b, 0x625a, 0x006c, 0x0069, 0x0070, 0x003b, 0x62ee, 0x0100,
    0x0062, 0x0074, 0x39dc, 0x1468, 0x0061, 0x00f2, 0x1469, 0x0072, 0x003b, 0xc000, 0xd835, 0xdd33,
    0x0074, 0x0072, 0x00e9, 0x39ae, 0x0073, 0x0075, 0x0100, 0x0062, 0x0070, 0x39ef, 0x39f1, 0x00bb,
    0x0d1c, 0x00bb, 0x0d59, 0x0070, 0x0066, 0x003b, 0xc000, 0xd835, 0xdd67, 0x0072, 0x006f, 0x00f0,
    0x0efb, 0x0074, 0x0072, 0x00e9, 0x39b4, 0x0100, 0x0063, 0x0075, 0x3a06, 0x3a0b, 0x0072, 0x003b,
    0xc000, 0xd835, 0xdccb, 0x0100, 0x0062, 0x0070, 0x3a10, 0x3a18, 0x006e, 0x0100, 0x0045, 0x0065,
    0x3980, 0x3a16, 0x00bb, 0x397e, 0x006e, 0x0100, 0x0045, 0x0065, 0x3992, 0x3a1e, 0x00bb, 0x3990,
    0x0069, 0x0067, 0x007a, 0x0061, 0x0067, 0x003b, 0x699a, 0x0380, 0x0063, 0x0065, 0x0066, 0x006f,
    0x0070, 0x0072, 0x0073, 0x3a36, 0x3a3b, 0x3a56, 0x3a5b, 0x3a54, 0x3a61, 0x3a6a, 0x0069, 0x0072,
    0x0063, 0x003b, 0x4175, 0x0100, 0x0064, 0x0069, 0x3a40, 0x3a51, 0x0100, 0x0062, 0x0067, 0x3a45,
    0x3a49, 0x0061, 0x0072, 0x003b, 0x6a5f, 0x0065, 0x0100, 0x003b, 0x0071, 0x15fa, 0x3a4f, 0x003b,
    0x6259, 0x0065, 0x0072, 0x0070, 0x003b, 0x6118, 0x0072, 0x003b, 0xc000, 0xd835, 0xdd34, 0x0070,
    0x0066, 0x003b, 0xc000, 0xd835, 0xdd68, 0x0100, 0x003b, 0x0065, 0x1479, 0x3a66, 0x0061, 0x0074,
    0x00e8, 0x1479, 0x0063, 0x0072, 0x003b, 0xc000, 0xd835, 0xdccc, 0x0ae3, 0x178e, 0x3a87, 0x0000,
    0x3a8b, 0x0000, 0x3a90, 0x3a9b, 0x0000, 0x0000, 0x3a9d, 0x3aa8, 0x3aab, 0x3aaf, 0x0000, 0x0000,
    0x3ac3, 0x3ace, 0x0000, 0x3ad8, 0x17dc, 0x17df, 0x0074, 0x0072, 0x00e9, 0x17d1, 0x0072, 0x003b,
    0xc000, 0xd835, 0xdd35, 0x0100, 0x0041, 0x0061, 0x3a94, 0x3a97, 0x0072, 0x00f2, 0x03c3, 0x0072,
    0x00f2, 0x09f6, 0x003b, 0x43be, 0x0100, 0x0041, 0x0061, 0x3aa1, 0x3aa4, 0x0072, 0x00f2, 0x03b8,
    0x0072, 0x00f2, 0x09eb, 0x0061, 0x00f0, 0x2713, 0x0069, 0x0073, 0x003b, 0x62fb, 0x0180, 0x0064,
    0x0070, 0x0074, 0x17a4, 0x3ab5, 0x3abe, 0x0100, 0x0066, 0x006c, 0x3aba, 0x17a9, 0x003b, 0xc000,
    0xd835, 0xdd69, 0x0069, 0x006d, 0x00e5, 0x17b2, 0x0100, 0x0041, 0x0061, 0x3ac7, 0x3aca, 0x0072,
    0x00f2, 0x03ce, 0x0072, 0x00f2, 0x0a01, 0x0100, 0x0063, 0x0071, 0x3ad2, 0x17b8, 0x0072, 0x003b,
    0xc000, 0xd835, 0xdccd, 0x0100, 0x0070, 0x0074, 0x17d6, 0x3adc, 0x0072, 0x00e9, 0x17d4, 0x0400,
    0x0061, 0x0063, 0x0065, 0x0066, 0x0069, 0x006f, 0x0073, 0x0075, 0x3af0, 0x3afd, 0x3b08, 0x3b0c,
    0x3b11, 0x3b15, 0x3b1b, 0x3b21, 0x0063, 0x0100, 0x0075, 0x0079, 0x3af6, 0x3afb, 0x0074, 0x0065,
    0x803b, 0x00fd, 0x40fd, 0x003b, 0x444f, 0x0100, 0x0069, 0x0079, 0x3b02, 0x3b06, 0x0072, 0x0063,
    0x003b, 0x4177, 0x003b, 0x444b, 0x006e, 0x803b, 0x00a5, 0x40a5, 0x0072, 0x003b, 0xc000, 0xd835,
    0xdd36, 0x0063, 0x0079, 0x003b, 0x4457, 0x0070, 0x0066, 0x003b, 0xc000, 0xd835, 0xdd6a, 0x0063,
    0x0072, 0x003b, 0xc000, 0xd835, 0xdcce, 0x0100, 0x0063, 0x006d, 0x3b26, 0x3b29, 0x0079, 0x003b,
    0x444e, 0x006c, 0x803b, 0x00ff, 0x40ff, 0x0500, 0x0061, 0x0063, 0x0064, 0x0065, 0x0066, 0x0068,
    0x0069, 0x006f, 0x0073, 0x0077, 0x3b42, 0x3b48, 0x3b54, 0x3b58, 0x3b64, 0x3b69, 0x3b6d, 0x3b74,
    0x3b7a, 0x3b80, 0x0063, 0x0075, 0x0074, 0x0065, 0x003b, 0x417a, 0x0100, 0x0061, 0x0079, 0x3b4d,
    0x3b52, 0x0072, 0x006f, 0x006e, 0x003b, 0x417e, 0x003b, 0x4437, 0x006f, 0x0074, 0x003b, 0x417c,
    0x0100, 0x0065, 0x0074, 0x3b5d, 0x3b61, 0x0074, 0x0072, 0x00e6, 0x155f, 0x0061, 0x003b, 0x43b6,
    0x0072, 0x003b, 0xc000, 0xd835, 0xdd37, 0x0063, 0x0079, 0x003b, 0x4436, 0x0067, 0x0072, 0x0061,
    0x0072, 0x0072, 0x003b, 0x61dd, 0x0070, 0x0066, 0x003b, 0xc000, 0xd835, 0xdd6b, 0x0063, 0x0072,
    0x003b, 0xc000, 0xd835, 0xdccf, 0x0100, 0x006a, 0x006e, 0x3b85, 0x3b87, 0x003b, 0x600d, 0x006a,
    0x003b, 0x600c,
];
