//! Lookup data for the 15-case topology-preserving Marching Cubes.
//!
//! Every row is indexed by the configuration's position inside its case
//! (the second column of [`CASES`]); the trailing comment on each row is the
//! 8-bit configuration it belongs to. Triangle rows list edge ids, with 12
//! standing for the cube-centre vertex. Only `tables::mod` reads these.
//!
//! Test rows hold signed face ids (see [`crate::ambiguity::face_test`]); an
//! interior-test column holds the `alongEdgeSign`, followed by the reference
//! edge where the case needs one. Cases 4 and 10 store the side that may
//! tunnel instead: `1` for the non-negative corners, `-1` for the negative.

/// `[case, index within case]` for each of the 256 configurations.
pub(super) static CASES: [[u8; 2]; 256] = [
  [0, 0], // 0
  [1, 0], // 1
  [1, 1], // 2
  [2, 0], // 3
  [1, 2], // 4
  [3, 0], // 5
  [2, 1], // 6
  [5, 0], // 7
  [1, 3], // 8
  [2, 2], // 9
  [3, 1], // 10
  [5, 1], // 11
  [2, 3], // 12
  [5, 2], // 13
  [5, 3], // 14
  [8, 0], // 15
  [1, 4], // 16
  [2, 4], // 17
  [3, 2], // 18
  [5, 4], // 19
  [4, 0], // 20
  [6, 0], // 21
  [6, 1], // 22
  [11, 0], // 23
  [3, 3], // 24
  [5, 5], // 25
  [7, 0], // 26
  [9, 0], // 27
  [6, 2], // 28
  [14, 0], // 29
  [12, 0], // 30
  [5, 6], // 31
  [1, 5], // 32
  [3, 4], // 33
  [2, 5], // 34
  [5, 7], // 35
  [3, 5], // 36
  [7, 1], // 37
  [5, 8], // 38
  [9, 1], // 39
  [4, 1], // 40
  [6, 3], // 41
  [6, 4], // 42
  [14, 1], // 43
  [6, 5], // 44
  [12, 1], // 45
  [11, 1], // 46
  [5, 9], // 47
  [2, 6], // 48
  [5, 10], // 49
  [5, 11], // 50
  [8, 1], // 51
  [6, 6], // 52
  [12, 2], // 53
  [14, 2], // 54
  [5, 12], // 55
  [6, 7], // 56
  [11, 2], // 57
  [12, 3], // 58
  [5, 13], // 59
  [10, 0], // 60
  [6, 8], // 61
  [6, 9], // 62
  [2, 7], // 63
  [1, 6], // 64
  [4, 2], // 65
  [3, 6], // 66
  [6, 10], // 67
  [2, 8], // 68
  [6, 11], // 69
  [5, 14], // 70
  [14, 3], // 71
  [3, 7], // 72
  [6, 12], // 73
  [7, 2], // 74
  [12, 4], // 75
  [5, 15], // 76
  [11, 3], // 77
  [9, 2], // 78
  [5, 16], // 79
  [3, 8], // 80
  [6, 13], // 81
  [7, 3], // 82
  [12, 5], // 83
  [6, 14], // 84
  [10, 1], // 85
  [12, 6], // 86
  [6, 15], // 87
  [7, 4], // 88
  [12, 7], // 89
  [13, 0], // 90
  [7, 5], // 91
  [12, 8], // 92
  [6, 16], // 93
  [7, 6], // 94
  [3, 9], // 95
  [2, 9], // 96
  [6, 17], // 97
  [5, 17], // 98
  [11, 4], // 99
  [5, 18], // 100
  [12, 9], // 101
  [8, 2], // 102
  [5, 19], // 103
  [6, 18], // 104
  [10, 2], // 105
  [12, 10], // 106
  [6, 19], // 107
  [14, 4], // 108
  [6, 20], // 109
  [5, 20], // 110
  [2, 10], // 111
  [5, 21], // 112
  [14, 5], // 113
  [9, 3], // 114
  [5, 22], // 115
  [11, 5], // 116
  [6, 21], // 117
  [5, 23], // 118
  [2, 11], // 119
  [12, 11], // 120
  [6, 22], // 121
  [7, 7], // 122
  [3, 10], // 123
  [6, 23], // 124
  [4, 3], // 125
  [3, 11], // 126
  [1, 7], // 127
  [1, 8], // 128
  [3, 12], // 129
  [4, 4], // 130
  [6, 24], // 131
  [3, 13], // 132
  [7, 8], // 133
  [6, 25], // 134
  [12, 12], // 135
  [2, 12], // 136
  [5, 24], // 137
  [6, 26], // 138
  [11, 6], // 139
  [5, 25], // 140
  [9, 4], // 141
  [14, 6], // 142
  [5, 26], // 143
  [2, 13], // 144
  [5, 27], // 145
  [6, 27], // 146
  [14, 7], // 147
  [6, 28], // 148
  [12, 13], // 149
  [10, 3], // 150
  [6, 29], // 151
  [5, 28], // 152
  [8, 3], // 153
  [12, 14], // 154
  [5, 29], // 155
  [11, 7], // 156
  [5, 30], // 157
  [6, 30], // 158
  [2, 14], // 159
  [3, 14], // 160
  [7, 9], // 161
  [6, 31], // 162
  [12, 15], // 163
  [7, 10], // 164
  [13, 1], // 165
  [12, 16], // 166
  [7, 11], // 167
  [6, 32], // 168
  [12, 17], // 169
  [10, 4], // 170
  [6, 33], // 171
  [12, 18], // 172
  [7, 12], // 173
  [6, 34], // 174
  [3, 15], // 175
  [5, 31], // 176
  [9, 5], // 177
  [11, 8], // 178
  [5, 32], // 179
  [12, 19], // 180
  [7, 13], // 181
  [6, 35], // 182
  [3, 16], // 183
  [14, 8], // 184
  [5, 33], // 185
  [6, 36], // 186
  [2, 15], // 187
  [6, 37], // 188
  [3, 17], // 189
  [4, 5], // 190
  [1, 9], // 191
  [2, 16], // 192
  [6, 38], // 193
  [6, 39], // 194
  [10, 5], // 195
  [5, 34], // 196
  [12, 20], // 197
  [11, 9], // 198
  [6, 40], // 199
  [5, 35], // 200
  [14, 9], // 201
  [12, 21], // 202
  [6, 41], // 203
  [8, 4], // 204
  [5, 36], // 205
  [5, 37], // 206
  [2, 17], // 207
  [5, 38], // 208
  [11, 10], // 209
  [12, 22], // 210
  [6, 42], // 211
  [14, 10], // 212
  [6, 43], // 213
  [6, 44], // 214
  [4, 6], // 215
  [9, 6], // 216
  [5, 39], // 217
  [7, 14], // 218
  [3, 18], // 219
  [5, 40], // 220
  [2, 18], // 221
  [3, 19], // 222
  [1, 10], // 223
  [5, 41], // 224
  [12, 23], // 225
  [14, 11], // 226
  [6, 45], // 227
  [9, 7], // 228
  [7, 15], // 229
  [5, 42], // 230
  [3, 20], // 231
  [11, 11], // 232
  [6, 46], // 233
  [6, 47], // 234
  [4, 7], // 235
  [5, 43], // 236
  [3, 21], // 237
  [2, 19], // 238
  [1, 11], // 239
  [8, 5], // 240
  [5, 44], // 241
  [5, 45], // 242
  [2, 20], // 243
  [5, 46], // 244
  [3, 22], // 245
  [2, 21], // 246
  [1, 12], // 247
  [5, 47], // 248
  [2, 22], // 249
  [3, 23], // 250
  [1, 13], // 251
  [2, 23], // 252
  [1, 14], // 253
  [1, 15], // 254
  [0, 0], // 255
];

/// Case 1: one corner separated.
pub(super) static TILING1: [[[u8; 3]; 1]; 16] = [
  [[0, 8, 3]], // 1
  [[0, 1, 9]], // 2
  [[1, 2, 10]], // 4
  [[2, 3, 11]], // 8
  [[4, 7, 8]], // 16
  [[4, 9, 5]], // 32
  [[5, 10, 6]], // 64
  [[6, 7, 11]], // 127
  [[6, 11, 7]], // 128
  [[5, 6, 10]], // 191
  [[4, 5, 9]], // 223
  [[4, 8, 7]], // 239
  [[2, 11, 3]], // 247
  [[1, 10, 2]], // 251
  [[0, 9, 1]], // 253
  [[0, 3, 8]], // 254
];

/// Case 2: one edge separated.
pub(super) static TILING2: [[[u8; 3]; 2]; 24] = [
  [[9, 8, 3], [1, 9, 3]], // 3
  [[2, 10, 9], [0, 2, 9]], // 6
  [[8, 11, 2], [0, 8, 2]], // 9
  [[3, 11, 10], [1, 3, 10]], // 12
  [[4, 7, 3], [0, 4, 3]], // 17
  [[1, 5, 4], [0, 1, 4]], // 34
  [[7, 8, 9], [5, 7, 9]], // 48
  [[7, 11, 10], [5, 7, 10]], // 63
  [[2, 6, 5], [1, 2, 5]], // 68
  [[9, 10, 6], [4, 9, 6]], // 96
  [[8, 11, 6], [4, 8, 6]], // 111
  [[6, 7, 3], [2, 6, 3]], // 119
  [[3, 7, 6], [2, 3, 6]], // 136
  [[6, 11, 8], [4, 6, 8]], // 144
  [[6, 10, 9], [4, 6, 9]], // 159
  [[5, 6, 2], [1, 5, 2]], // 187
  [[10, 11, 7], [5, 10, 7]], // 192
  [[9, 8, 7], [5, 9, 7]], // 207
  [[4, 5, 1], [0, 4, 1]], // 221
  [[3, 7, 4], [0, 3, 4]], // 238
  [[10, 11, 3], [1, 10, 3]], // 243
  [[2, 11, 8], [0, 2, 8]], // 246
  [[9, 10, 2], [0, 9, 2]], // 249
  [[3, 8, 9], [1, 3, 9]], // 252
];

/// Case 3: the ambiguous face.
pub(super) static TEST3: [i8; 24] = [
  5, // 5
  5, // 10
  1, // 18
  4, // 24
  1, // 33
  2, // 36
  2, // 66
  3, // 72
  6, // 80
  -6, // 95
  -3, // 123
  -4, // 126
  4, // 129
  3, // 132
  6, // 160
  -6, // 175
  -3, // 183
  -2, // 189
  -2, // 219
  -1, // 222
  -4, // 231
  -1, // 237
  -5, // 245
  -5, // 250
];

/// Case 3.1: corners stay apart on the face.
pub(super) static TILING3_1: [[[u8; 3]; 2]; 24] = [
  [[0, 8, 3], [1, 2, 10]], // 5
  [[0, 1, 9], [2, 3, 11]], // 10
  [[0, 1, 9], [4, 7, 8]], // 18
  [[2, 3, 11], [4, 7, 8]], // 24
  [[0, 8, 3], [4, 9, 5]], // 33
  [[1, 2, 10], [4, 9, 5]], // 36
  [[0, 1, 9], [5, 10, 6]], // 66
  [[2, 3, 11], [5, 10, 6]], // 72
  [[4, 7, 8], [5, 10, 6]], // 80
  [[4, 5, 9], [6, 7, 11]], // 95
  [[1, 10, 2], [6, 7, 11]], // 123
  [[0, 3, 8], [6, 7, 11]], // 126
  [[0, 8, 3], [6, 11, 7]], // 129
  [[1, 2, 10], [6, 11, 7]], // 132
  [[4, 9, 5], [6, 11, 7]], // 160
  [[4, 8, 7], [5, 6, 10]], // 175
  [[2, 11, 3], [5, 6, 10]], // 183
  [[0, 9, 1], [5, 6, 10]], // 189
  [[1, 10, 2], [4, 5, 9]], // 219
  [[0, 3, 8], [4, 5, 9]], // 222
  [[2, 11, 3], [4, 8, 7]], // 231
  [[0, 9, 1], [4, 8, 7]], // 237
  [[0, 9, 1], [2, 11, 3]], // 245
  [[0, 3, 8], [1, 10, 2]], // 250
];

/// Case 3.2: corners joined across the face.
pub(super) static TILING3_2: [[[u8; 3]; 4]; 24] = [
  [[3, 2, 10], [8, 3, 10], [8, 10, 1], [0, 8, 1]], // 5
  [[2, 1, 9], [11, 2, 9], [3, 11, 9], [0, 3, 9]], // 10
  [[9, 4, 7], [1, 9, 7], [1, 7, 8], [0, 1, 8]], // 18
  [[3, 8, 4], [2, 3, 4], [4, 7, 11], [2, 4, 11]], // 24
  [[4, 8, 3], [5, 4, 3], [9, 5, 3], [0, 9, 3]], // 33
  [[10, 5, 4], [2, 10, 4], [2, 4, 9], [1, 2, 9]], // 36
  [[1, 10, 6], [0, 1, 6], [6, 5, 9], [0, 6, 9]], // 66
  [[11, 6, 5], [3, 11, 5], [3, 5, 10], [2, 3, 10]], // 72
  [[6, 7, 8], [10, 6, 8], [5, 10, 8], [4, 5, 8]], // 80
  [[6, 5, 9], [11, 6, 9], [7, 11, 9], [4, 7, 9]], // 95
  [[10, 6, 7], [1, 10, 7], [7, 11, 2], [1, 7, 2]], // 123
  [[3, 11, 6], [0, 3, 6], [6, 7, 8], [0, 6, 8]], // 126
  [[8, 7, 6], [0, 8, 6], [6, 11, 3], [0, 6, 3]], // 129
  [[2, 11, 7], [1, 2, 7], [7, 6, 10], [1, 7, 10]], // 132
  [[5, 6, 11], [9, 5, 11], [9, 11, 7], [4, 9, 7]], // 160
  [[7, 6, 10], [8, 7, 10], [8, 10, 5], [4, 8, 5]], // 175
  [[6, 11, 3], [5, 6, 3], [10, 5, 3], [2, 10, 3]], // 183
  [[9, 5, 6], [0, 9, 6], [6, 10, 1], [0, 6, 1]], // 189
  [[5, 10, 2], [4, 5, 2], [9, 4, 2], [1, 9, 2]], // 219
  [[8, 4, 5], [3, 8, 5], [3, 5, 9], [0, 3, 9]], // 222
  [[11, 7, 4], [2, 11, 4], [4, 8, 3], [2, 4, 3]], // 231
  [[4, 9, 1], [7, 4, 1], [8, 7, 1], [0, 8, 1]], // 237
  [[1, 2, 11], [9, 1, 11], [9, 11, 3], [0, 9, 3]], // 245
  [[2, 3, 8], [10, 2, 8], [1, 10, 8], [0, 1, 8]], // 250
];

/// Case 4: side that may tunnel (`1` non-negative).
pub(super) static TEST4: [i8; 8] = [
  1, // 20
  1, // 40
  1, // 65
  -1, // 125
  1, // 130
  -1, // 190
  -1, // 215
  -1, // 235
];

/// Case 4.1: two separate corners.
pub(super) static TILING4_1: [[[u8; 3]; 2]; 8] = [
  [[1, 2, 10], [4, 7, 8]], // 20
  [[2, 3, 11], [4, 9, 5]], // 40
  [[0, 8, 3], [5, 10, 6]], // 65
  [[0, 9, 1], [6, 7, 11]], // 125
  [[0, 1, 9], [6, 11, 7]], // 130
  [[0, 3, 8], [5, 6, 10]], // 190
  [[2, 11, 3], [4, 5, 9]], // 215
  [[1, 10, 2], [4, 8, 7]], // 235
];

/// Case 4.2: tunnel through the cube.
pub(super) static TILING4_2: [[[u8; 3]; 6]; 8] = [
  [[8, 4, 1], [1, 2, 8], [7, 8, 2], [2, 10, 7], [4, 7, 10], [10, 1, 4]], // 20
  [[2, 3, 9], [4, 9, 3], [3, 11, 4], [5, 4, 11], [11, 2, 5], [9, 5, 2]], // 40
  [[0, 8, 5], [6, 5, 8], [8, 3, 6], [10, 6, 3], [3, 0, 10], [5, 10, 0]], // 65
  [[0, 9, 7], [6, 7, 9], [9, 1, 6], [11, 6, 1], [1, 0, 11], [7, 11, 0]], // 125
  [[0, 1, 11], [6, 11, 1], [1, 9, 6], [7, 6, 9], [9, 0, 7], [11, 7, 0]], // 130
  [[10, 5, 0], [0, 3, 10], [6, 10, 3], [3, 8, 6], [5, 6, 8], [8, 0, 5]], // 190
  [[2, 11, 5], [4, 5, 11], [11, 3, 4], [9, 4, 3], [3, 2, 9], [5, 9, 2]], // 215
  [[1, 10, 4], [7, 4, 10], [10, 2, 7], [8, 7, 2], [2, 1, 8], [4, 8, 1]], // 235
];

/// Case 5.
pub(super) static TILING5: [[[u8; 3]; 3]; 48] = [
  [[9, 8, 3], [10, 9, 3], [2, 10, 3]], // 7
  [[8, 11, 2], [9, 8, 2], [1, 9, 2]], // 11
  [[11, 10, 1], [8, 11, 1], [0, 8, 1]], // 13
  [[3, 11, 10], [3, 10, 9], [0, 3, 9]], // 14
  [[4, 7, 3], [9, 4, 3], [1, 9, 3]], // 19
  [[0, 4, 7], [7, 11, 2], [0, 7, 2]], // 25
  [[7, 11, 10], [7, 10, 9], [4, 7, 9]], // 31
  [[1, 5, 4], [4, 8, 3], [1, 4, 3]], // 35
  [[0, 2, 10], [10, 5, 4], [0, 10, 4]], // 38
  [[11, 10, 5], [8, 11, 5], [4, 8, 5]], // 47
  [[9, 5, 7], [9, 7, 3], [0, 9, 3]], // 49
  [[5, 7, 8], [1, 5, 8], [0, 1, 8]], // 50
  [[10, 5, 7], [10, 7, 3], [2, 10, 3]], // 55
  [[7, 11, 2], [5, 7, 2], [1, 5, 2]], // 59
  [[6, 5, 9], [2, 6, 9], [0, 2, 9]], // 70
  [[1, 3, 11], [11, 6, 5], [1, 11, 5]], // 76
  [[8, 11, 6], [9, 8, 6], [5, 9, 6]], // 79
  [[10, 6, 4], [1, 10, 4], [0, 1, 4]], // 98
  [[6, 4, 9], [2, 6, 9], [1, 2, 9]], // 100
  [[4, 8, 3], [6, 4, 3], [2, 6, 3]], // 103
  [[11, 6, 4], [3, 11, 4], [0, 3, 4]], // 110
  [[7, 8, 9], [7, 9, 10], [6, 7, 10]], // 112
  [[6, 7, 3], [10, 6, 3], [1, 10, 3]], // 115
  [[6, 7, 8], [2, 6, 8], [0, 2, 8]], // 118
  [[7, 6, 2], [8, 7, 2], [0, 8, 2]], // 137
  [[7, 6, 10], [3, 7, 10], [1, 3, 10]], // 140
  [[9, 8, 7], [10, 9, 7], [6, 10, 7]], // 143
  [[6, 11, 3], [4, 6, 3], [0, 4, 3]], // 145
  [[8, 4, 6], [3, 8, 6], [2, 3, 6]], // 152
  [[9, 4, 6], [9, 6, 2], [1, 9, 2]], // 155
  [[6, 10, 1], [4, 6, 1], [0, 4, 1]], // 157
  [[6, 11, 8], [6, 8, 9], [5, 6, 9]], // 176
  [[1, 5, 6], [6, 11, 3], [1, 6, 3]], // 179
  [[5, 6, 2], [9, 5, 2], [0, 9, 2]], // 185
  [[11, 7, 5], [2, 11, 5], [1, 2, 5]], // 196
  [[7, 5, 10], [3, 7, 10], [2, 3, 10]], // 200
  [[8, 7, 5], [8, 5, 1], [0, 8, 1]], // 205
  [[7, 5, 9], [3, 7, 9], [0, 3, 9]], // 206
  [[5, 10, 11], [5, 11, 8], [4, 5, 8]], // 208
  [[0, 4, 5], [5, 10, 2], [0, 5, 2]], // 217
  [[1, 3, 8], [8, 4, 5], [1, 8, 5]], // 220
  [[10, 11, 7], [9, 10, 7], [4, 9, 7]], // 224
  [[0, 2, 11], [11, 7, 4], [0, 11, 4]], // 230
  [[7, 4, 9], [3, 7, 9], [1, 3, 9]], // 236
  [[10, 11, 3], [9, 10, 3], [0, 9, 3]], // 241
  [[1, 10, 11], [1, 11, 8], [0, 1, 8]], // 242
  [[2, 11, 8], [2, 8, 9], [1, 2, 9]], // 244
  [[3, 8, 9], [3, 9, 10], [2, 3, 10]], // 248
];

/// Case 6: `[face, interior sign, reference edge]`.
pub(super) static TEST6: [[i8; 3]; 48] = [
  [5, 1, 0], // 21
  [1, 1, 0], // 22
  [4, 1, 1], // 28
  [1, 1, 0], // 41
  [5, 1, 0], // 42
  [2, 1, 1], // 44
  [2, 1, 1], // 52
  [4, 1, 2], // 56
  [-2, -1, 0], // 61
  [-4, -1, 0], // 62
  [2, 1, 1], // 67
  [5, 1, 0], // 69
  [3, 1, 0], // 73
  [6, 1, 0], // 81
  [6, 1, 1], // 84
  [-6, -1, 2], // 87
  [-6, -1, 0], // 93
  [1, 1, 0], // 97
  [3, 1, 2], // 104
  [-3, -1, 1], // 107
  [-1, -1, 0], // 109
  [-5, -1, 0], // 117
  [-3, -1, 0], // 121
  [-4, -1, 1], // 124
  [4, 1, 1], // 131
  [3, 1, 0], // 134
  [5, 1, 0], // 138
  [1, 1, 0], // 146
  [3, 1, 1], // 148
  [-3, -1, 2], // 151
  [-1, -1, 0], // 158
  [6, 1, 0], // 162
  [6, 1, 2], // 168
  [-6, -1, 1], // 171
  [-6, -1, 0], // 174
  [-3, -1, 0], // 182
  [-5, -1, 0], // 186
  [-2, -1, 1], // 188
  [4, 1, 0], // 193
  [2, 1, 0], // 194
  [-4, -1, 2], // 199
  [-2, -1, 1], // 203
  [-2, -1, 1], // 211
  [-5, -1, 0], // 213
  [-1, -1, 0], // 214
  [-4, -1, 1], // 227
  [-1, -1, 0], // 233
  [-5, -1, 0], // 234
];

/// Case 6.1.1.
pub(super) static TILING6_1_1: [[[u8; 3]; 3]; 48] = [
  [[4, 7, 3], [0, 4, 3], [1, 2, 10]], // 21
  [[2, 10, 9], [0, 2, 9], [4, 7, 8]], // 22
  [[3, 11, 10], [1, 3, 10], [4, 7, 8]], // 28
  [[8, 11, 2], [0, 8, 2], [4, 9, 5]], // 41
  [[1, 5, 4], [0, 1, 4], [2, 3, 11]], // 42
  [[3, 11, 10], [1, 3, 10], [4, 9, 5]], // 44
  [[1, 2, 10], [7, 8, 9], [5, 7, 9]], // 52
  [[2, 3, 11], [7, 8, 9], [5, 7, 9]], // 56
  [[0, 9, 1], [7, 11, 10], [5, 7, 10]], // 61
  [[0, 3, 8], [7, 11, 10], [5, 7, 10]], // 62
  [[9, 8, 3], [1, 9, 3], [5, 10, 6]], // 67
  [[0, 8, 3], [2, 6, 5], [1, 2, 5]], // 69
  [[8, 11, 2], [0, 8, 2], [5, 10, 6]], // 73
  [[4, 7, 3], [0, 4, 3], [5, 10, 6]], // 81
  [[2, 6, 5], [1, 2, 5], [4, 7, 8]], // 84
  [[6, 7, 3], [2, 6, 3], [4, 5, 9]], // 87
  [[4, 5, 1], [0, 4, 1], [6, 7, 11]], // 93
  [[0, 8, 3], [9, 10, 6], [4, 9, 6]], // 97
  [[2, 3, 11], [9, 10, 6], [4, 9, 6]], // 104
  [[1, 10, 2], [8, 11, 6], [4, 8, 6]], // 107
  [[0, 9, 1], [8, 11, 6], [4, 8, 6]], // 109
  [[0, 9, 1], [6, 7, 3], [2, 6, 3]], // 117
  [[9, 10, 2], [0, 9, 2], [6, 7, 11]], // 121
  [[3, 8, 9], [1, 3, 9], [6, 7, 11]], // 124
  [[9, 8, 3], [1, 9, 3], [6, 11, 7]], // 131
  [[2, 10, 9], [0, 2, 9], [6, 11, 7]], // 134
  [[0, 1, 9], [3, 7, 6], [2, 3, 6]], // 138
  [[0, 1, 9], [6, 11, 8], [4, 6, 8]], // 146
  [[1, 2, 10], [6, 11, 8], [4, 6, 8]], // 148
  [[2, 11, 3], [6, 10, 9], [4, 6, 9]], // 151
  [[0, 3, 8], [6, 10, 9], [4, 6, 9]], // 158
  [[1, 5, 4], [0, 1, 4], [6, 11, 7]], // 162
  [[3, 7, 6], [2, 3, 6], [4, 9, 5]], // 168
  [[5, 6, 2], [1, 5, 2], [4, 8, 7]], // 171
  [[3, 7, 4], [0, 3, 4], [5, 6, 10]], // 174
  [[2, 11, 8], [0, 2, 8], [5, 6, 10]], // 182
  [[0, 3, 8], [5, 6, 2], [1, 5, 2]], // 186
  [[3, 8, 9], [1, 3, 9], [5, 6, 10]], // 188
  [[0, 8, 3], [10, 11, 7], [5, 10, 7]], // 193
  [[0, 1, 9], [10, 11, 7], [5, 10, 7]], // 194
  [[2, 11, 3], [9, 8, 7], [5, 9, 7]], // 199
  [[1, 10, 2], [9, 8, 7], [5, 9, 7]], // 203
  [[10, 11, 3], [1, 10, 3], [4, 5, 9]], // 211
  [[4, 5, 1], [0, 4, 1], [2, 11, 3]], // 213
  [[2, 11, 8], [0, 2, 8], [4, 5, 9]], // 214
  [[10, 11, 3], [1, 10, 3], [4, 8, 7]], // 227
  [[9, 10, 2], [0, 9, 2], [4, 8, 7]], // 233
  [[3, 7, 4], [0, 3, 4], [1, 10, 2]], // 234
];

/// Case 6.1.2: tunnel, one quad split through the centre.
pub(super) static TILING6_1_2: [[[u8; 3]; 9]; 48] = [
  [[0, 4, 10], [1, 2, 7], [10, 1, 7], [7, 3, 10], [3, 0, 10], [4, 7, 12], [7, 2, 12], [2, 10, 12], [10, 4, 12]], // 21
  [[0, 2, 7], [8, 4, 10], [7, 8, 10], [10, 9, 7], [9, 0, 7], [2, 10, 12], [10, 4, 12], [4, 7, 12], [7, 2, 12]], // 22
  [[1, 3, 4], [3, 11, 4], [7, 8, 10], [4, 7, 10], [10, 1, 4], [11, 10, 12], [10, 8, 12], [8, 4, 12], [4, 11, 12]], // 28
  [[0, 8, 5], [8, 11, 5], [4, 9, 2], [5, 4, 2], [2, 0, 5], [11, 2, 12], [2, 9, 12], [9, 5, 12], [5, 11, 12]], // 41
  [[0, 1, 11], [1, 5, 11], [2, 3, 4], [11, 2, 4], [4, 0, 11], [5, 4, 12], [4, 3, 12], [3, 11, 12], [11, 5, 12]], // 42
  [[1, 3, 4], [9, 5, 11], [4, 9, 11], [11, 10, 4], [10, 1, 4], [3, 11, 12], [11, 5, 12], [5, 4, 12], [4, 3, 12]], // 44
  [[5, 7, 2], [9, 5, 2], [8, 9, 2], [2, 10, 8], [10, 1, 8], [1, 2, 12], [2, 7, 12], [7, 8, 12], [8, 1, 12]], // 52
  [[8, 9, 2], [7, 8, 2], [5, 7, 2], [2, 3, 5], [3, 11, 5], [11, 2, 12], [2, 9, 12], [9, 5, 12], [5, 11, 12]], // 56
  [[10, 5, 0], [11, 10, 0], [7, 11, 0], [0, 9, 7], [9, 1, 7], [1, 0, 12], [0, 5, 12], [5, 7, 12], [7, 1, 12]], // 61
  [[11, 10, 0], [7, 11, 0], [5, 7, 0], [0, 3, 5], [3, 8, 5], [8, 0, 12], [0, 10, 12], [10, 5, 12], [5, 8, 12]], // 62
  [[1, 9, 6], [9, 8, 6], [5, 10, 3], [6, 5, 3], [3, 1, 6], [8, 3, 12], [3, 10, 12], [10, 6, 12], [6, 8, 12]], // 67
  [[2, 6, 8], [1, 2, 8], [5, 1, 8], [8, 3, 5], [3, 0, 5], [0, 8, 12], [8, 6, 12], [6, 5, 12], [5, 0, 12]], // 69
  [[0, 8, 5], [8, 11, 5], [11, 2, 5], [10, 6, 0], [5, 10, 0], [2, 0, 12], [0, 6, 12], [6, 5, 12], [5, 2, 12]], // 73
  [[6, 5, 0], [10, 6, 0], [0, 4, 10], [4, 7, 10], [7, 3, 10], [3, 0, 12], [0, 5, 12], [5, 10, 12], [10, 3, 12]], // 81
  [[8, 4, 1], [1, 2, 8], [2, 6, 8], [6, 5, 8], [4, 7, 1], [5, 1, 12], [1, 7, 12], [7, 8, 12], [8, 5, 12]], // 84
  [[4, 5, 2], [9, 4, 2], [2, 6, 9], [6, 7, 9], [7, 3, 9], [3, 2, 12], [2, 5, 12], [5, 9, 12], [9, 3, 12]], // 87
  [[6, 7, 0], [11, 6, 0], [0, 4, 11], [4, 5, 11], [5, 1, 11], [1, 0, 12], [0, 7, 12], [7, 11, 12], [11, 1, 12]], // 93
  [[0, 8, 10], [4, 9, 3], [6, 4, 3], [10, 6, 3], [3, 0, 10], [8, 3, 12], [3, 9, 12], [9, 10, 12], [10, 8, 12]], // 97
  [[6, 4, 3], [10, 6, 3], [9, 10, 3], [3, 11, 9], [11, 2, 9], [2, 3, 12], [3, 4, 12], [4, 9, 12], [9, 2, 12]], // 104
  [[6, 4, 1], [11, 6, 1], [8, 11, 1], [1, 10, 8], [10, 2, 8], [2, 1, 12], [1, 4, 12], [4, 8, 12], [8, 2, 12]], // 107
  [[0, 9, 11], [4, 8, 1], [6, 4, 1], [11, 6, 1], [1, 0, 11], [9, 1, 12], [1, 8, 12], [8, 11, 12], [11, 9, 12]], // 109
  [[2, 6, 9], [3, 2, 9], [7, 3, 9], [9, 1, 7], [1, 0, 7], [0, 9, 12], [9, 6, 12], [6, 7, 12], [7, 0, 12]], // 117
  [[0, 9, 7], [9, 10, 7], [10, 2, 7], [11, 6, 0], [7, 11, 0], [2, 0, 12], [0, 6, 12], [6, 7, 12], [7, 2, 12]], // 121
  [[1, 3, 6], [3, 8, 6], [7, 11, 9], [6, 7, 9], [9, 1, 6], [8, 9, 12], [9, 11, 12], [11, 6, 12], [6, 8, 12]], // 124
  [[1, 9, 6], [9, 8, 6], [8, 3, 6], [11, 7, 1], [6, 11, 1], [3, 1, 12], [1, 7, 12], [7, 6, 12], [6, 3, 12]], // 131
  [[6, 11, 0], [7, 6, 0], [0, 2, 7], [2, 10, 7], [10, 9, 7], [9, 0, 12], [0, 11, 12], [11, 7, 12], [7, 9, 12]], // 134
  [[0, 1, 7], [2, 3, 9], [6, 2, 9], [7, 6, 9], [9, 0, 7], [1, 9, 12], [9, 3, 12], [3, 7, 12], [7, 1, 12]], // 138
  [[4, 6, 1], [8, 4, 1], [11, 8, 1], [1, 9, 11], [9, 0, 11], [0, 1, 12], [1, 6, 12], [6, 11, 12], [11, 0, 12]], // 146
  [[11, 8, 1], [6, 11, 1], [4, 6, 1], [1, 2, 4], [2, 10, 4], [10, 1, 12], [1, 8, 12], [8, 4, 12], [4, 10, 12]], // 148
  [[2, 11, 9], [6, 10, 3], [4, 6, 3], [9, 4, 3], [3, 2, 9], [11, 3, 12], [3, 10, 12], [10, 9, 12], [9, 11, 12]], // 151
  [[4, 6, 3], [9, 4, 3], [10, 9, 3], [3, 8, 10], [8, 0, 10], [0, 3, 12], [3, 6, 12], [6, 10, 12], [10, 0, 12]], // 158
  [[0, 1, 11], [1, 5, 11], [5, 4, 11], [7, 6, 0], [11, 7, 0], [4, 0, 12], [0, 6, 12], [6, 11, 12], [11, 4, 12]], // 162
  [[2, 3, 9], [3, 7, 9], [7, 6, 9], [5, 4, 2], [9, 5, 2], [6, 2, 12], [2, 4, 12], [4, 9, 12], [9, 6, 12]], // 168
  [[7, 4, 1], [8, 7, 1], [1, 5, 8], [5, 6, 8], [6, 2, 8], [2, 1, 12], [1, 4, 12], [4, 8, 12], [8, 2, 12]], // 171
  [[10, 5, 0], [0, 3, 10], [3, 7, 10], [7, 4, 10], [5, 6, 0], [4, 0, 12], [0, 6, 12], [6, 10, 12], [10, 4, 12]], // 174
  [[0, 2, 5], [2, 11, 5], [6, 10, 8], [5, 6, 8], [8, 0, 5], [11, 8, 12], [8, 10, 12], [10, 5, 12], [5, 11, 12]], // 182
  [[0, 3, 5], [2, 1, 8], [6, 2, 8], [5, 6, 8], [8, 0, 5], [3, 8, 12], [8, 1, 12], [1, 5, 12], [5, 3, 12]], // 186
  [[1, 3, 6], [10, 5, 8], [6, 10, 8], [8, 9, 6], [9, 1, 6], [3, 8, 12], [8, 5, 12], [5, 6, 12], [6, 3, 12]], // 188
  [[7, 5, 0], [11, 7, 0], [10, 11, 0], [0, 8, 10], [8, 3, 10], [3, 0, 12], [0, 5, 12], [5, 10, 12], [10, 3, 12]], // 193
  [[7, 5, 0], [11, 7, 0], [0, 1, 11], [1, 9, 11], [5, 10, 0], [9, 0, 12], [0, 10, 12], [10, 11, 12], [11, 9, 12]], // 194
  [[7, 5, 2], [8, 7, 2], [9, 8, 2], [2, 11, 9], [11, 3, 9], [3, 2, 12], [2, 5, 12], [5, 9, 12], [9, 3, 12]], // 199
  [[1, 10, 8], [5, 9, 2], [7, 5, 2], [8, 7, 2], [2, 1, 8], [10, 2, 12], [2, 9, 12], [9, 8, 12], [8, 10, 12]], // 203
  [[1, 10, 4], [10, 11, 4], [5, 9, 3], [4, 5, 3], [3, 1, 4], [11, 3, 12], [3, 9, 12], [9, 4, 12], [4, 11, 12]], // 211
  [[0, 4, 11], [3, 2, 5], [11, 3, 5], [5, 1, 11], [1, 0, 11], [4, 5, 12], [5, 2, 12], [2, 11, 12], [11, 4, 12]], // 213
  [[0, 2, 5], [9, 4, 11], [5, 9, 11], [11, 8, 5], [8, 0, 5], [2, 11, 12], [11, 4, 12], [4, 5, 12], [5, 2, 12]], // 214
  [[1, 10, 4], [10, 11, 4], [11, 3, 4], [8, 7, 1], [4, 8, 1], [3, 1, 12], [1, 7, 12], [7, 4, 12], [4, 3, 12]], // 227
  [[0, 9, 7], [9, 10, 7], [4, 8, 2], [7, 4, 2], [2, 0, 7], [10, 2, 12], [2, 8, 12], [8, 7, 12], [7, 10, 12]], // 233
  [[0, 3, 10], [3, 7, 10], [2, 1, 4], [10, 2, 4], [4, 0, 10], [7, 4, 12], [4, 1, 12], [1, 10, 12], [10, 7, 12]], // 234
];

/// Case 6.2.
pub(super) static TILING6_2: [[[u8; 3]; 5]; 48] = [
  [[3, 2, 10], [7, 3, 10], [4, 7, 10], [4, 10, 1], [0, 4, 1]], // 21
  [[9, 4, 7], [10, 9, 7], [2, 10, 7], [2, 7, 8], [0, 2, 8]], // 22
  [[3, 8, 4], [7, 11, 10], [4, 7, 10], [3, 4, 10], [1, 3, 10]], // 28
  [[5, 4, 8], [8, 11, 2], [5, 8, 2], [9, 5, 2], [0, 9, 2]], // 41
  [[11, 2, 1], [1, 5, 4], [11, 1, 4], [3, 11, 4], [0, 3, 4]], // 42
  [[10, 5, 4], [11, 10, 4], [3, 11, 4], [3, 4, 9], [1, 3, 9]], // 44
  [[10, 5, 7], [2, 10, 7], [7, 8, 9], [2, 7, 9], [1, 2, 9]], // 52
  [[2, 3, 8], [8, 9, 5], [2, 8, 5], [5, 7, 11], [2, 5, 11]], // 56
  [[0, 9, 5], [5, 7, 11], [0, 5, 11], [11, 10, 1], [0, 11, 1]], // 61
  [[0, 3, 11], [11, 10, 5], [0, 11, 5], [5, 7, 8], [0, 5, 8]], // 62
  [[6, 5, 9], [9, 8, 3], [6, 9, 3], [10, 6, 3], [1, 10, 3]], // 67
  [[3, 2, 6], [8, 3, 6], [6, 5, 1], [8, 6, 1], [0, 8, 1]], // 69
  [[11, 6, 5], [8, 11, 5], [5, 10, 2], [8, 5, 2], [0, 8, 2]], // 73
  [[4, 5, 10], [6, 7, 3], [10, 6, 3], [4, 10, 3], [0, 4, 3]], // 81
  [[6, 7, 8], [2, 6, 8], [8, 4, 5], [2, 8, 5], [1, 2, 5]], // 84
  [[6, 5, 9], [4, 7, 3], [9, 4, 3], [6, 9, 3], [2, 6, 3]], // 87
  [[4, 7, 11], [6, 5, 1], [11, 6, 1], [4, 11, 1], [0, 4, 1]], // 93
  [[4, 8, 3], [6, 4, 3], [10, 6, 3], [9, 10, 3], [0, 9, 3]], // 97
  [[11, 6, 4], [3, 11, 4], [4, 9, 10], [3, 4, 10], [2, 3, 10]], // 104
  [[1, 10, 6], [6, 4, 8], [1, 6, 8], [8, 11, 2], [1, 8, 2]], // 107
  [[4, 9, 1], [6, 4, 1], [11, 6, 1], [8, 11, 1], [0, 8, 1]], // 109
  [[1, 2, 6], [9, 1, 6], [6, 7, 3], [9, 6, 3], [0, 9, 3]], // 117
  [[10, 6, 7], [9, 10, 7], [7, 11, 2], [9, 7, 2], [0, 9, 2]], // 121
  [[3, 11, 6], [7, 8, 9], [6, 7, 9], [3, 6, 9], [1, 3, 9]], // 124
  [[8, 7, 6], [9, 8, 6], [6, 11, 3], [9, 6, 3], [1, 9, 3]], // 131
  [[2, 11, 7], [6, 10, 9], [7, 6, 9], [2, 7, 9], [0, 2, 9]], // 134
  [[2, 1, 9], [6, 2, 9], [7, 6, 9], [3, 7, 9], [0, 3, 9]], // 138
  [[9, 4, 6], [1, 9, 6], [6, 11, 8], [1, 6, 8], [0, 1, 8]], // 146
  [[1, 2, 11], [11, 8, 4], [1, 11, 4], [4, 6, 10], [1, 4, 10]], // 148
  [[6, 11, 3], [4, 6, 3], [9, 4, 3], [10, 9, 3], [2, 10, 3]], // 151
  [[8, 4, 6], [3, 8, 6], [6, 10, 9], [3, 6, 9], [0, 3, 9]], // 158
  [[5, 6, 11], [1, 5, 11], [11, 7, 4], [1, 11, 4], [0, 1, 4]], // 162
  [[7, 4, 9], [3, 7, 9], [9, 5, 6], [3, 9, 6], [2, 3, 6]], // 168
  [[5, 4, 8], [7, 6, 2], [8, 7, 2], [5, 8, 2], [1, 5, 2]], // 171
  [[7, 6, 10], [3, 7, 10], [10, 5, 4], [3, 10, 4], [0, 3, 4]], // 174
  [[2, 10, 5], [6, 11, 8], [5, 6, 8], [2, 5, 8], [0, 2, 8]], // 182
  [[2, 3, 8], [6, 2, 8], [5, 6, 8], [1, 5, 8], [0, 1, 8]], // 186
  [[9, 5, 6], [8, 9, 6], [3, 8, 6], [3, 6, 10], [1, 3, 10]], // 188
  [[0, 8, 7], [7, 5, 10], [0, 7, 10], [10, 11, 3], [0, 10, 3]], // 193
  [[0, 1, 10], [10, 11, 7], [0, 10, 7], [7, 5, 9], [0, 7, 9]], // 194
  [[2, 11, 7], [7, 5, 9], [2, 7, 9], [9, 8, 3], [2, 9, 3]], // 199
  [[5, 10, 2], [7, 5, 2], [8, 7, 2], [9, 8, 2], [1, 9, 2]], // 203
  [[4, 5, 10], [10, 11, 3], [4, 10, 3], [9, 4, 3], [1, 9, 3]], // 211
  [[1, 2, 11], [5, 1, 11], [4, 5, 11], [4, 11, 3], [0, 4, 3]], // 213
  [[8, 4, 5], [11, 8, 5], [2, 11, 5], [2, 5, 9], [0, 2, 9]], // 214
  [[11, 7, 4], [10, 11, 4], [4, 8, 3], [10, 4, 3], [1, 10, 3]], // 227
  [[7, 4, 9], [9, 10, 2], [7, 9, 2], [8, 7, 2], [0, 8, 2]], // 233
  [[10, 2, 3], [3, 7, 4], [10, 3, 4], [1, 10, 4], [0, 1, 4]], // 234
];

/// Case 7: `[face, face, face, interior sign, reference edge]`.
pub(super) static TEST7: [[i8; 5]; 16] = [
  [-1, -4, -5, 1, 0], // 26
  [-1, -2, -5, 1, 0], // 37
  [-2, -3, -5, 1, 1], // 74
  [-1, -2, -6, 1, 4], // 82
  [-3, -4, -6, 1, 6], // 88
  [2, 3, 6, -1, 5], // 91
  [1, 4, 6, -1, 4], // 94
  [3, 4, 5, -1, 2], // 122
  [-3, -4, -5, 1, 2], // 133
  [-1, -4, -6, 1, 4], // 161
  [-2, -3, -6, 1, 5], // 164
  [3, 4, 6, -1, 6], // 167
  [1, 2, 6, -1, 4], // 173
  [2, 3, 5, -1, 1], // 181
  [1, 2, 5, -1, 0], // 218
  [1, 4, 5, -1, 0], // 229
];

/// Case 7.1.
pub(super) static TILING7_1: [[[u8; 3]; 3]; 16] = [
  [[0, 1, 9], [2, 3, 11], [4, 7, 8]], // 26
  [[0, 8, 3], [1, 2, 10], [4, 9, 5]], // 37
  [[0, 1, 9], [2, 3, 11], [5, 10, 6]], // 74
  [[0, 1, 9], [4, 7, 8], [5, 10, 6]], // 82
  [[2, 3, 11], [4, 7, 8], [5, 10, 6]], // 88
  [[1, 10, 2], [4, 5, 9], [6, 7, 11]], // 91
  [[0, 3, 8], [4, 5, 9], [6, 7, 11]], // 94
  [[0, 3, 8], [1, 10, 2], [6, 7, 11]], // 122
  [[0, 8, 3], [1, 2, 10], [6, 11, 7]], // 133
  [[0, 8, 3], [4, 9, 5], [6, 11, 7]], // 161
  [[1, 2, 10], [4, 9, 5], [6, 11, 7]], // 164
  [[2, 11, 3], [4, 8, 7], [5, 6, 10]], // 167
  [[0, 9, 1], [4, 8, 7], [5, 6, 10]], // 173
  [[0, 9, 1], [2, 11, 3], [5, 6, 10]], // 181
  [[0, 3, 8], [1, 10, 2], [4, 5, 9]], // 218
  [[0, 9, 1], [2, 11, 3], [4, 8, 7]], // 229
];

/// Case 7.2, one row per joined face.
pub(super) static TILING7_2: [[[[u8; 3]; 5]; 3]; 16] = [
  // 26
  [
    [[9, 4, 7], [1, 9, 7], [1, 7, 8], [0, 1, 8], [2, 3, 11]],
    [[0, 1, 9], [3, 8, 4], [2, 3, 4], [4, 7, 11], [2, 4, 11]],
    [[2, 1, 9], [11, 2, 9], [3, 11, 9], [0, 3, 9], [4, 7, 8]],
  ],
  // 37
  [
    [[4, 8, 3], [5, 4, 3], [9, 5, 3], [0, 9, 3], [1, 2, 10]],
    [[0, 8, 3], [10, 5, 4], [2, 10, 4], [2, 4, 9], [1, 2, 9]],
    [[3, 2, 10], [8, 3, 10], [8, 10, 1], [0, 8, 1], [4, 9, 5]],
  ],
  // 74
  [
    [[1, 10, 6], [0, 1, 6], [6, 5, 9], [0, 6, 9], [2, 3, 11]],
    [[0, 1, 9], [11, 6, 5], [3, 11, 5], [3, 5, 10], [2, 3, 10]],
    [[2, 1, 9], [11, 2, 9], [3, 11, 9], [0, 3, 9], [5, 10, 6]],
  ],
  // 82
  [
    [[9, 4, 7], [1, 9, 7], [1, 7, 8], [0, 1, 8], [5, 10, 6]],
    [[1, 10, 6], [0, 1, 6], [6, 5, 9], [0, 6, 9], [4, 7, 8]],
    [[0, 1, 9], [6, 7, 8], [10, 6, 8], [5, 10, 8], [4, 5, 8]],
  ],
  // 88
  [
    [[11, 6, 5], [3, 11, 5], [3, 5, 10], [2, 3, 10], [4, 7, 8]],
    [[3, 8, 4], [2, 3, 4], [4, 7, 11], [2, 4, 11], [5, 10, 6]],
    [[2, 3, 11], [6, 7, 8], [10, 6, 8], [5, 10, 8], [4, 5, 8]],
  ],
  // 91
  [
    [[5, 10, 2], [4, 5, 2], [9, 4, 2], [1, 9, 2], [6, 7, 11]],
    [[10, 6, 7], [1, 10, 7], [7, 11, 2], [1, 7, 2], [4, 5, 9]],
    [[1, 10, 2], [6, 5, 9], [11, 6, 9], [7, 11, 9], [4, 7, 9]],
  ],
  // 94
  [
    [[8, 4, 5], [3, 8, 5], [3, 5, 9], [0, 3, 9], [6, 7, 11]],
    [[3, 11, 6], [0, 3, 6], [6, 7, 8], [0, 6, 8], [4, 5, 9]],
    [[0, 3, 8], [6, 5, 9], [11, 6, 9], [7, 11, 9], [4, 7, 9]],
  ],
  // 122
  [
    [[0, 3, 8], [10, 6, 7], [1, 10, 7], [7, 11, 2], [1, 7, 2]],
    [[3, 11, 6], [0, 3, 6], [6, 7, 8], [0, 6, 8], [1, 10, 2]],
    [[2, 3, 8], [10, 2, 8], [1, 10, 8], [0, 1, 8], [6, 7, 11]],
  ],
  // 133
  [
    [[0, 8, 3], [2, 11, 7], [1, 2, 7], [7, 6, 10], [1, 7, 10]],
    [[8, 7, 6], [0, 8, 6], [6, 11, 3], [0, 6, 3], [1, 2, 10]],
    [[3, 2, 10], [8, 3, 10], [8, 10, 1], [0, 8, 1], [6, 11, 7]],
  ],
  // 161
  [
    [[4, 8, 3], [5, 4, 3], [9, 5, 3], [0, 9, 3], [6, 11, 7]],
    [[8, 7, 6], [0, 8, 6], [6, 11, 3], [0, 6, 3], [4, 9, 5]],
    [[0, 8, 3], [5, 6, 11], [9, 5, 11], [9, 11, 7], [4, 9, 7]],
  ],
  // 164
  [
    [[10, 5, 4], [2, 10, 4], [2, 4, 9], [1, 2, 9], [6, 11, 7]],
    [[2, 11, 7], [1, 2, 7], [7, 6, 10], [1, 7, 10], [4, 9, 5]],
    [[1, 2, 10], [5, 6, 11], [9, 5, 11], [9, 11, 7], [4, 9, 7]],
  ],
  // 167
  [
    [[6, 11, 3], [5, 6, 3], [10, 5, 3], [2, 10, 3], [4, 8, 7]],
    [[11, 7, 4], [2, 11, 4], [4, 8, 3], [2, 4, 3], [5, 6, 10]],
    [[2, 11, 3], [7, 6, 10], [8, 7, 10], [8, 10, 5], [4, 8, 5]],
  ],
  // 173
  [
    [[4, 9, 1], [7, 4, 1], [8, 7, 1], [0, 8, 1], [5, 6, 10]],
    [[9, 5, 6], [0, 9, 6], [6, 10, 1], [0, 6, 1], [4, 8, 7]],
    [[0, 9, 1], [7, 6, 10], [8, 7, 10], [8, 10, 5], [4, 8, 5]],
  ],
  // 181
  [
    [[9, 5, 6], [0, 9, 6], [6, 10, 1], [0, 6, 1], [2, 11, 3]],
    [[0, 9, 1], [6, 11, 3], [5, 6, 3], [10, 5, 3], [2, 10, 3]],
    [[1, 2, 11], [9, 1, 11], [9, 11, 3], [0, 9, 3], [5, 6, 10]],
  ],
  // 218
  [
    [[8, 4, 5], [3, 8, 5], [3, 5, 9], [0, 3, 9], [1, 10, 2]],
    [[0, 3, 8], [5, 10, 2], [4, 5, 2], [9, 4, 2], [1, 9, 2]],
    [[2, 3, 8], [10, 2, 8], [1, 10, 8], [0, 1, 8], [4, 5, 9]],
  ],
  // 229
  [
    [[4, 9, 1], [7, 4, 1], [8, 7, 1], [0, 8, 1], [2, 11, 3]],
    [[0, 9, 1], [11, 7, 4], [2, 11, 4], [4, 8, 3], [2, 4, 3]],
    [[1, 2, 11], [9, 1, 11], [9, 11, 3], [0, 9, 3], [4, 8, 7]],
  ],
];

/// Case 7.3, one row per pair of joined faces.
pub(super) static TILING7_3: [[[[u8; 3]; 9]; 3]; 16] = [
  // 26
  [
    [[0, 1, 12], [1, 9, 12], [9, 4, 12], [4, 7, 12], [7, 11, 12], [11, 2, 12], [2, 3, 12], [3, 8, 12], [8, 0, 12]],
    [[0, 3, 12], [3, 11, 12], [11, 2, 12], [2, 1, 12], [1, 9, 12], [9, 4, 12], [4, 7, 12], [7, 8, 12], [8, 0, 12]],
    [[0, 3, 12], [3, 8, 12], [8, 4, 12], [4, 7, 12], [7, 11, 12], [11, 2, 12], [2, 1, 12], [1, 9, 12], [9, 0, 12]],
  ],
  // 37
  [
    [[0, 9, 12], [9, 1, 12], [1, 2, 12], [2, 10, 12], [10, 5, 12], [5, 4, 12], [4, 8, 12], [8, 3, 12], [3, 0, 12]],
    [[0, 9, 12], [9, 5, 12], [5, 4, 12], [4, 8, 12], [8, 3, 12], [3, 2, 12], [2, 10, 12], [10, 1, 12], [1, 0, 12]],
    [[0, 8, 12], [8, 3, 12], [3, 2, 12], [2, 10, 12], [10, 5, 12], [5, 4, 12], [4, 9, 12], [9, 1, 12], [1, 0, 12]],
  ],
  // 74
  [
    [[0, 1, 12], [1, 10, 12], [10, 2, 12], [2, 3, 12], [3, 11, 12], [11, 6, 12], [6, 5, 12], [5, 9, 12], [9, 0, 12]],
    [[0, 3, 12], [3, 11, 12], [11, 2, 12], [2, 1, 12], [1, 10, 12], [10, 6, 12], [6, 5, 12], [5, 9, 12], [9, 0, 12]],
    [[0, 3, 12], [3, 11, 12], [11, 6, 12], [6, 5, 12], [5, 10, 12], [10, 2, 12], [2, 1, 12], [1, 9, 12], [9, 0, 12]],
  ],
  // 82
  [
    [[0, 1, 12], [1, 10, 12], [10, 6, 12], [6, 5, 12], [5, 9, 12], [9, 4, 12], [4, 7, 12], [7, 8, 12], [8, 0, 12]],
    [[0, 1, 12], [1, 9, 12], [9, 4, 12], [4, 5, 12], [5, 10, 12], [10, 6, 12], [6, 7, 12], [7, 8, 12], [8, 0, 12]],
    [[0, 1, 12], [1, 10, 12], [10, 6, 12], [6, 7, 12], [7, 8, 12], [8, 4, 12], [4, 5, 12], [5, 9, 12], [9, 0, 12]],
  ],
  // 88
  [
    [[2, 3, 12], [3, 8, 12], [8, 4, 12], [4, 7, 12], [7, 11, 12], [11, 6, 12], [6, 5, 12], [5, 10, 12], [10, 2, 12]],
    [[2, 3, 12], [3, 11, 12], [11, 6, 12], [6, 7, 12], [7, 8, 12], [8, 4, 12], [4, 5, 12], [5, 10, 12], [10, 2, 12]],
    [[2, 3, 12], [3, 8, 12], [8, 4, 12], [4, 5, 12], [5, 10, 12], [10, 6, 12], [6, 7, 12], [7, 11, 12], [11, 2, 12]],
  ],
  // 91
  [
    [[1, 9, 12], [9, 4, 12], [4, 5, 12], [5, 10, 12], [10, 6, 12], [6, 7, 12], [7, 11, 12], [11, 2, 12], [2, 1, 12]],
    [[1, 9, 12], [9, 4, 12], [4, 7, 12], [7, 11, 12], [11, 6, 12], [6, 5, 12], [5, 10, 12], [10, 2, 12], [2, 1, 12]],
    [[1, 10, 12], [10, 6, 12], [6, 5, 12], [5, 9, 12], [9, 4, 12], [4, 7, 12], [7, 11, 12], [11, 2, 12], [2, 1, 12]],
  ],
  // 94
  [
    [[0, 3, 12], [3, 11, 12], [11, 6, 12], [6, 7, 12], [7, 8, 12], [8, 4, 12], [4, 5, 12], [5, 9, 12], [9, 0, 12]],
    [[0, 3, 12], [3, 8, 12], [8, 4, 12], [4, 7, 12], [7, 11, 12], [11, 6, 12], [6, 5, 12], [5, 9, 12], [9, 0, 12]],
    [[0, 3, 12], [3, 11, 12], [11, 6, 12], [6, 5, 12], [5, 9, 12], [9, 4, 12], [4, 7, 12], [7, 8, 12], [8, 0, 12]],
  ],
  // 122
  [
    [[0, 3, 12], [3, 11, 12], [11, 2, 12], [2, 1, 12], [1, 10, 12], [10, 6, 12], [6, 7, 12], [7, 8, 12], [8, 0, 12]],
    [[0, 1, 12], [1, 10, 12], [10, 6, 12], [6, 7, 12], [7, 11, 12], [11, 2, 12], [2, 3, 12], [3, 8, 12], [8, 0, 12]],
    [[0, 1, 12], [1, 10, 12], [10, 2, 12], [2, 3, 12], [3, 11, 12], [11, 6, 12], [6, 7, 12], [7, 8, 12], [8, 0, 12]],
  ],
  // 133
  [
    [[0, 8, 12], [8, 7, 12], [7, 6, 12], [6, 10, 12], [10, 1, 12], [1, 2, 12], [2, 11, 12], [11, 3, 12], [3, 0, 12]],
    [[0, 8, 12], [8, 3, 12], [3, 2, 12], [2, 11, 12], [11, 7, 12], [7, 6, 12], [6, 10, 12], [10, 1, 12], [1, 0, 12]],
    [[0, 8, 12], [8, 7, 12], [7, 6, 12], [6, 11, 12], [11, 3, 12], [3, 2, 12], [2, 10, 12], [10, 1, 12], [1, 0, 12]],
  ],
  // 161
  [
    [[0, 9, 12], [9, 5, 12], [5, 4, 12], [4, 8, 12], [8, 7, 12], [7, 6, 12], [6, 11, 12], [11, 3, 12], [3, 0, 12]],
    [[0, 9, 12], [9, 5, 12], [5, 6, 12], [6, 11, 12], [11, 7, 12], [7, 4, 12], [4, 8, 12], [8, 3, 12], [3, 0, 12]],
    [[0, 8, 12], [8, 7, 12], [7, 4, 12], [4, 9, 12], [9, 5, 12], [5, 6, 12], [6, 11, 12], [11, 3, 12], [3, 0, 12]],
  ],
  // 164
  [
    [[1, 2, 12], [2, 11, 12], [11, 7, 12], [7, 6, 12], [6, 10, 12], [10, 5, 12], [5, 4, 12], [4, 9, 12], [9, 1, 12]],
    [[1, 2, 12], [2, 10, 12], [10, 5, 12], [5, 6, 12], [6, 11, 12], [11, 7, 12], [7, 4, 12], [4, 9, 12], [9, 1, 12]],
    [[1, 2, 12], [2, 11, 12], [11, 7, 12], [7, 4, 12], [4, 9, 12], [9, 5, 12], [5, 6, 12], [6, 10, 12], [10, 1, 12]],
  ],
  // 167
  [
    [[2, 10, 12], [10, 5, 12], [5, 6, 12], [6, 11, 12], [11, 7, 12], [7, 4, 12], [4, 8, 12], [8, 3, 12], [3, 2, 12]],
    [[2, 10, 12], [10, 5, 12], [5, 4, 12], [4, 8, 12], [8, 7, 12], [7, 6, 12], [6, 11, 12], [11, 3, 12], [3, 2, 12]],
    [[2, 11, 12], [11, 7, 12], [7, 6, 12], [6, 10, 12], [10, 5, 12], [5, 4, 12], [4, 8, 12], [8, 3, 12], [3, 2, 12]],
  ],
  // 173
  [
    [[0, 8, 12], [8, 7, 12], [7, 4, 12], [4, 9, 12], [9, 5, 12], [5, 6, 12], [6, 10, 12], [10, 1, 12], [1, 0, 12]],
    [[0, 8, 12], [8, 7, 12], [7, 6, 12], [6, 10, 12], [10, 5, 12], [5, 4, 12], [4, 9, 12], [9, 1, 12], [1, 0, 12]],
    [[0, 9, 12], [9, 5, 12], [5, 4, 12], [4, 8, 12], [8, 7, 12], [7, 6, 12], [6, 10, 12], [10, 1, 12], [1, 0, 12]],
  ],
  // 181
  [
    [[0, 9, 12], [9, 5, 12], [5, 6, 12], [6, 11, 12], [11, 3, 12], [3, 2, 12], [2, 10, 12], [10, 1, 12], [1, 0, 12]],
    [[0, 9, 12], [9, 5, 12], [5, 6, 12], [6, 10, 12], [10, 1, 12], [1, 2, 12], [2, 11, 12], [11, 3, 12], [3, 0, 12]],
    [[0, 9, 12], [9, 1, 12], [1, 2, 12], [2, 10, 12], [10, 5, 12], [5, 6, 12], [6, 11, 12], [11, 3, 12], [3, 0, 12]],
  ],
  // 218
  [
    [[0, 3, 12], [3, 8, 12], [8, 4, 12], [4, 5, 12], [5, 10, 12], [10, 2, 12], [2, 1, 12], [1, 9, 12], [9, 0, 12]],
    [[0, 1, 12], [1, 10, 12], [10, 2, 12], [2, 3, 12], [3, 8, 12], [8, 4, 12], [4, 5, 12], [5, 9, 12], [9, 0, 12]],
    [[0, 1, 12], [1, 9, 12], [9, 4, 12], [4, 5, 12], [5, 10, 12], [10, 2, 12], [2, 3, 12], [3, 8, 12], [8, 0, 12]],
  ],
  // 229
  [
    [[0, 8, 12], [8, 3, 12], [3, 2, 12], [2, 11, 12], [11, 7, 12], [7, 4, 12], [4, 9, 12], [9, 1, 12], [1, 0, 12]],
    [[0, 8, 12], [8, 7, 12], [7, 4, 12], [4, 9, 12], [9, 1, 12], [1, 2, 12], [2, 11, 12], [11, 3, 12], [3, 0, 12]],
    [[0, 9, 12], [9, 1, 12], [1, 2, 12], [2, 11, 12], [11, 7, 12], [7, 4, 12], [4, 8, 12], [8, 3, 12], [3, 0, 12]],
  ],
];

/// Case 7.4.1.
pub(super) static TILING7_4_1: [[[u8; 3]; 5]; 16] = [
  [[0, 3, 8], [9, 4, 7], [7, 11, 2], [9, 7, 2], [1, 9, 2]], // 26
  [[0, 9, 1], [10, 5, 4], [4, 8, 3], [10, 4, 3], [2, 10, 3]], // 37
  [[3, 11, 6], [6, 5, 9], [3, 6, 9], [0, 3, 9], [1, 10, 2]], // 74
  [[1, 10, 6], [6, 7, 8], [1, 6, 8], [0, 1, 8], [4, 5, 9]], // 82
  [[3, 8, 4], [4, 5, 10], [3, 4, 10], [2, 3, 10], [6, 7, 11]], // 88
  [[9, 4, 7], [7, 11, 2], [9, 7, 2], [1, 9, 2], [5, 10, 6]], // 91
  [[3, 11, 6], [6, 5, 9], [3, 6, 9], [0, 3, 9], [4, 7, 8]], // 94
  [[1, 10, 6], [6, 7, 8], [1, 6, 8], [0, 1, 8], [2, 3, 11]], // 122
  [[8, 7, 6], [6, 10, 1], [8, 6, 1], [0, 8, 1], [2, 11, 3]], // 133
  [[9, 5, 6], [6, 11, 3], [9, 6, 3], [0, 9, 3], [4, 8, 7]], // 161
  [[2, 11, 7], [7, 4, 9], [2, 7, 9], [1, 2, 9], [5, 6, 10]], // 164
  [[10, 5, 4], [4, 8, 3], [10, 4, 3], [2, 10, 3], [6, 11, 7]], // 167
  [[8, 7, 6], [6, 10, 1], [8, 6, 1], [0, 8, 1], [4, 9, 5]], // 173
  [[9, 5, 6], [6, 11, 3], [9, 6, 3], [0, 9, 3], [1, 2, 10]], // 181
  [[0, 1, 9], [3, 8, 4], [4, 5, 10], [3, 4, 10], [2, 3, 10]], // 218
  [[0, 8, 3], [2, 11, 7], [7, 4, 9], [2, 7, 9], [1, 2, 9]], // 229
];

/// Case 7.4.2: tunnel.
pub(super) static TILING7_4_2: [[[u8; 3]; 9]; 16] = [
  [[4, 7, 0], [0, 3, 4], [9, 4, 3], [1, 9, 3], [3, 8, 1], [2, 1, 8], [11, 2, 8], [8, 0, 11], [7, 11, 0]], // 26
  [[2, 10, 0], [0, 9, 2], [3, 2, 9], [8, 3, 9], [9, 1, 8], [4, 8, 1], [5, 4, 1], [1, 0, 5], [10, 5, 0]], // 37
  [[0, 3, 10], [1, 10, 3], [3, 11, 1], [11, 6, 1], [2, 1, 6], [6, 5, 2], [5, 9, 2], [10, 2, 9], [9, 0, 10]], // 74
  [[4, 5, 0], [0, 1, 4], [1, 10, 4], [9, 4, 10], [10, 6, 9], [6, 7, 9], [5, 9, 7], [7, 8, 5], [8, 0, 5]], // 82
  [[6, 7, 2], [2, 3, 6], [3, 8, 6], [11, 6, 8], [8, 4, 11], [4, 5, 11], [7, 11, 5], [5, 10, 7], [10, 2, 7]], // 88
  [[1, 9, 6], [10, 6, 9], [9, 4, 10], [4, 7, 10], [5, 10, 7], [7, 11, 5], [11, 2, 5], [6, 5, 2], [2, 1, 6]], // 91
  [[4, 7, 0], [0, 3, 4], [3, 11, 4], [8, 4, 11], [11, 6, 8], [6, 5, 8], [7, 8, 5], [5, 9, 7], [9, 0, 7]], // 94
  [[0, 1, 11], [3, 11, 1], [1, 10, 3], [10, 6, 3], [2, 3, 6], [6, 7, 2], [7, 8, 2], [11, 2, 8], [8, 0, 11]], // 122
  [[2, 11, 0], [0, 8, 2], [8, 7, 2], [3, 2, 7], [7, 6, 3], [6, 10, 3], [11, 3, 10], [10, 1, 11], [1, 0, 11]], // 133
  [[0, 9, 7], [8, 7, 9], [9, 5, 8], [5, 6, 8], [4, 8, 6], [6, 11, 4], [11, 3, 4], [7, 4, 3], [3, 0, 7]], // 161
  [[5, 6, 1], [1, 2, 5], [2, 11, 5], [10, 5, 11], [11, 7, 10], [7, 4, 10], [6, 10, 4], [4, 9, 6], [9, 1, 6]], // 164
  [[2, 10, 7], [11, 7, 10], [10, 5, 11], [5, 4, 11], [6, 11, 4], [4, 8, 6], [8, 3, 6], [7, 6, 3], [3, 2, 7]], // 167
  [[0, 8, 5], [9, 5, 8], [8, 7, 9], [7, 6, 9], [4, 9, 6], [6, 10, 4], [10, 1, 4], [5, 4, 1], [1, 0, 5]], // 173
  [[2, 10, 0], [0, 9, 2], [9, 5, 2], [1, 2, 5], [5, 6, 1], [6, 11, 1], [10, 1, 11], [11, 3, 10], [3, 0, 10]], // 181
  [[4, 5, 0], [0, 1, 4], [8, 4, 1], [3, 8, 1], [1, 9, 3], [2, 3, 9], [10, 2, 9], [9, 0, 10], [5, 10, 0]], // 218
  [[2, 11, 0], [0, 8, 2], [1, 2, 8], [9, 1, 8], [8, 3, 9], [4, 9, 3], [7, 4, 3], [3, 0, 7], [11, 7, 0]], // 229
];

/// Case 8: a face separated.
pub(super) static TILING8: [[[u8; 3]; 2]; 6] = [
  [[11, 10, 9], [8, 11, 9]], // 15
  [[5, 7, 3], [1, 5, 3]], // 51
  [[2, 6, 4], [0, 2, 4]], // 102
  [[4, 6, 2], [0, 4, 2]], // 153
  [[3, 7, 5], [1, 3, 5]], // 204
  [[9, 10, 11], [8, 9, 11]], // 240
];

/// Case 9.
pub(super) static TILING9: [[[u8; 3]; 4]; 8] = [
  [[9, 4, 7], [7, 11, 2], [9, 7, 2], [1, 9, 2]], // 27
  [[10, 5, 4], [4, 8, 3], [10, 4, 3], [2, 10, 3]], // 39
  [[3, 11, 6], [6, 5, 9], [3, 6, 9], [0, 3, 9]], // 78
  [[1, 10, 6], [6, 7, 8], [1, 6, 8], [0, 1, 8]], // 114
  [[8, 7, 6], [6, 10, 1], [8, 6, 1], [0, 8, 1]], // 141
  [[9, 5, 6], [6, 11, 3], [9, 6, 3], [0, 9, 3]], // 177
  [[3, 8, 4], [4, 5, 10], [3, 4, 10], [2, 3, 10]], // 216
  [[2, 11, 7], [7, 4, 9], [2, 7, 9], [1, 2, 9]], // 228
];

/// Case 10: `[face, face, tunnel side (sub 0), tunnel side (sub 3)]`.
pub(super) static TEST10: [[i8; 4]; 6] = [
  [-2, -4, -1, 1], // 60
  [5, 6, 1, -1], // 85
  [1, 3, 1, -1], // 105
  [-1, -3, -1, 1], // 150
  [-5, -6, -1, 1], // 170
  [2, 4, 1, -1], // 195
];

/// Case 10.1.1.
pub(super) static TILING10_1_1: [[[u8; 3]; 4]; 6] = [
  [[3, 8, 9], [1, 3, 9], [7, 11, 10], [5, 7, 10]], // 60
  [[4, 7, 3], [0, 4, 3], [2, 6, 5], [1, 2, 5]], // 85
  [[8, 11, 2], [0, 8, 2], [9, 10, 6], [4, 9, 6]], // 105
  [[2, 11, 8], [0, 2, 8], [6, 10, 9], [4, 6, 9]], // 150
  [[3, 7, 4], [0, 3, 4], [5, 6, 2], [1, 5, 2]], // 170
  [[9, 8, 3], [1, 9, 3], [10, 11, 7], [5, 10, 7]], // 195
];

/// Case 10.1.1 with both faces joined.
pub(super) static TILING10_1_1_: [[[u8; 3]; 4]; 6] = [
  [[3, 11, 10], [1, 3, 10], [7, 8, 9], [5, 7, 9]], // 60
  [[4, 5, 1], [0, 4, 1], [6, 7, 3], [2, 6, 3]], // 85
  [[9, 10, 2], [0, 9, 2], [8, 11, 6], [4, 8, 6]], // 105
  [[2, 10, 9], [0, 2, 9], [6, 11, 8], [4, 6, 8]], // 150
  [[1, 5, 4], [0, 1, 4], [3, 7, 6], [2, 3, 6]], // 170
  [[10, 11, 3], [1, 10, 3], [9, 8, 7], [5, 9, 7]], // 195
];

/// Case 10.1.2: tunnel.
pub(super) static TILING10_1_2: [[[u8; 3]; 8]; 6] = [
  [[7, 11, 1], [5, 7, 1], [1, 3, 5], [10, 5, 3], [3, 8, 10], [11, 10, 8], [8, 9, 11], [9, 1, 11]], // 60
  [[6, 5, 0], [2, 6, 0], [0, 4, 2], [1, 2, 4], [4, 7, 1], [5, 1, 7], [7, 3, 5], [3, 0, 5]], // 85
  [[0, 8, 10], [9, 10, 8], [8, 11, 9], [4, 9, 11], [11, 2, 4], [6, 4, 2], [2, 0, 6], [10, 6, 0]], // 105
  [[6, 10, 0], [4, 6, 0], [0, 2, 4], [9, 4, 2], [2, 11, 9], [10, 9, 11], [11, 8, 10], [8, 0, 10]], // 150
  [[0, 3, 5], [1, 5, 3], [3, 7, 1], [2, 1, 7], [7, 4, 2], [6, 2, 4], [4, 0, 6], [5, 6, 0]], // 170
  [[1, 9, 11], [10, 11, 9], [9, 8, 10], [5, 10, 8], [8, 3, 5], [7, 5, 3], [3, 1, 7], [11, 7, 1]], // 195
];

/// Case 10.1.2 with both faces joined.
pub(super) static TILING10_1_2_: [[[u8; 3]; 8]; 6] = [
  [[7, 8, 1], [5, 7, 1], [1, 3, 5], [9, 5, 3], [3, 11, 9], [8, 9, 11], [11, 10, 8], [10, 1, 8]], // 60
  [[6, 7, 0], [2, 6, 0], [0, 4, 2], [3, 2, 4], [4, 5, 3], [7, 3, 5], [5, 1, 7], [1, 0, 7]], // 85
  [[0, 9, 11], [8, 11, 9], [9, 10, 8], [4, 8, 10], [10, 2, 4], [6, 4, 2], [2, 0, 6], [11, 6, 0]], // 105
  [[6, 11, 0], [4, 6, 0], [0, 2, 4], [8, 4, 2], [2, 10, 8], [11, 8, 10], [10, 9, 11], [9, 0, 11]], // 150
  [[0, 1, 7], [3, 7, 1], [1, 5, 3], [2, 3, 5], [5, 4, 2], [6, 2, 4], [4, 0, 6], [7, 6, 0]], // 170
  [[1, 10, 8], [9, 8, 10], [10, 11, 9], [5, 9, 11], [11, 3, 5], [7, 5, 3], [3, 1, 7], [8, 7, 1]], // 195
];

/// Case 10.2, first face joined.
pub(super) static TILING10_2: [[[u8; 3]; 8]; 6] = [
  [[1, 3, 12], [3, 8, 12], [8, 9, 12], [9, 5, 12], [5, 7, 12], [7, 11, 12], [11, 10, 12], [10, 1, 12]], // 60
  [[0, 4, 12], [4, 7, 12], [7, 3, 12], [3, 2, 12], [2, 6, 12], [6, 5, 12], [5, 1, 12], [1, 0, 12]], // 85
  [[0, 9, 12], [9, 10, 12], [10, 6, 12], [6, 4, 12], [4, 8, 12], [8, 11, 12], [11, 2, 12], [2, 0, 12]], // 105
  [[0, 2, 12], [2, 11, 12], [11, 8, 12], [8, 4, 12], [4, 6, 12], [6, 10, 12], [10, 9, 12], [9, 0, 12]], // 150
  [[0, 1, 12], [1, 5, 12], [5, 6, 12], [6, 2, 12], [2, 3, 12], [3, 7, 12], [7, 4, 12], [4, 0, 12]], // 170
  [[1, 10, 12], [10, 11, 12], [11, 7, 12], [7, 5, 12], [5, 9, 12], [9, 8, 12], [8, 3, 12], [3, 1, 12]], // 195
];

/// Case 10.2, second face joined.
pub(super) static TILING10_2_: [[[u8; 3]; 8]; 6] = [
  [[1, 3, 12], [3, 11, 12], [11, 10, 12], [10, 5, 12], [5, 7, 12], [7, 8, 12], [8, 9, 12], [9, 1, 12]], // 60
  [[0, 4, 12], [4, 5, 12], [5, 1, 12], [1, 2, 12], [2, 6, 12], [6, 7, 12], [7, 3, 12], [3, 0, 12]], // 85
  [[0, 8, 12], [8, 11, 12], [11, 6, 12], [6, 4, 12], [4, 9, 12], [9, 10, 12], [10, 2, 12], [2, 0, 12]], // 105
  [[0, 2, 12], [2, 10, 12], [10, 9, 12], [9, 4, 12], [4, 6, 12], [6, 11, 12], [11, 8, 12], [8, 0, 12]], // 150
  [[0, 3, 12], [3, 7, 12], [7, 6, 12], [6, 2, 12], [2, 1, 12], [1, 5, 12], [5, 4, 12], [4, 0, 12]], // 170
  [[1, 9, 12], [9, 8, 12], [8, 7, 12], [7, 5, 12], [5, 10, 12], [10, 11, 12], [11, 3, 12], [3, 1, 12]], // 195
];

/// Case 11.
pub(super) static TILING11: [[[u8; 3]; 4]; 12] = [
  [[4, 7, 3], [9, 4, 3], [10, 9, 3], [2, 10, 3]], // 23
  [[10, 5, 4], [11, 10, 4], [3, 11, 4], [0, 3, 4]], // 46
  [[7, 11, 2], [5, 7, 2], [9, 5, 2], [0, 9, 2]], // 57
  [[6, 5, 1], [11, 6, 1], [8, 11, 1], [0, 8, 1]], // 77
  [[4, 8, 3], [6, 4, 3], [10, 6, 3], [1, 10, 3]], // 99
  [[7, 8, 9], [6, 7, 9], [2, 6, 9], [1, 2, 9]], // 116
  [[7, 6, 2], [8, 7, 2], [9, 8, 2], [1, 9, 2]], // 139
  [[3, 8, 4], [4, 6, 10], [3, 4, 10], [1, 3, 10]], // 156
  [[6, 11, 8], [5, 6, 8], [1, 5, 8], [0, 1, 8]], // 178
  [[2, 11, 7], [7, 5, 9], [2, 7, 9], [0, 2, 9]], // 198
  [[4, 5, 10], [10, 11, 3], [4, 10, 3], [0, 4, 3]], // 209
  [[4, 9, 10], [7, 4, 10], [3, 7, 10], [2, 3, 10]], // 232
];

/// Case 12: `[face, face, sign, edge (sub 0), sign, edge (sub 3)]`.
pub(super) static TEST12: [[i8; 6]; 24] = [
  [-1, -4, -1, 0, 1, 0], // 30
  [1, 2, 1, 0, -1, 0], // 45
  [2, 5, 1, 0, -1, 0], // 53
  [-4, -5, -1, 0, 1, 0], // 58
  [2, 3, 1, 1, -1, 1], // 75
  [2, 6, 1, 4, -1, 4], // 83
  [-1, -6, -1, 4, 1, 4], // 86
  [3, 6, 1, 5, -1, 5], // 89
  [-4, -6, -1, 4, 1, 4], // 92
  [1, 5, 1, 0, -1, 0], // 101
  [-3, -5, -1, 1, 1, 1], // 106
  [-3, -4, -1, 2, 1, 2], // 120
  [3, 4, 1, 2, -1, 2], // 135
  [3, 5, 1, 1, -1, 1], // 149
  [-1, -5, -1, 0, 1, 0], // 154
  [4, 6, 1, 4, -1, 4], // 163
  [-3, -6, -1, 5, 1, 5], // 166
  [1, 6, 1, 4, -1, 4], // 169
  [-2, -6, -1, 4, 1, 4], // 172
  [-2, -3, -1, 1, 1, 1], // 180
  [4, 5, 1, 0, -1, 0], // 197
  [-2, -5, -1, 0, 1, 0], // 202
  [-1, -2, -1, 0, 1, 0], // 210
  [1, 4, 1, 0, -1, 0], // 225
];

/// Case 12.1.1.
pub(super) static TILING12_1_1: [[[u8; 3]; 4]; 24] = [
  [[0, 3, 8], [7, 11, 10], [7, 10, 9], [4, 7, 9]], // 30
  [[11, 10, 1], [8, 11, 1], [0, 8, 1], [4, 9, 5]], // 45
  [[9, 5, 7], [9, 7, 3], [0, 9, 3], [1, 2, 10]], // 53
  [[0, 3, 8], [7, 11, 2], [5, 7, 2], [1, 5, 2]], // 58
  [[8, 11, 2], [9, 8, 2], [1, 9, 2], [5, 10, 6]], // 75
  [[4, 7, 3], [9, 4, 3], [1, 9, 3], [5, 10, 6]], // 83
  [[6, 7, 8], [2, 6, 8], [0, 2, 8], [4, 5, 9]], // 86
  [[0, 4, 7], [7, 11, 2], [0, 7, 2], [5, 10, 6]], // 89
  [[1, 3, 8], [8, 4, 5], [1, 8, 5], [6, 7, 11]], // 92
  [[0, 8, 3], [6, 4, 9], [2, 6, 9], [1, 2, 9]], // 101
  [[11, 6, 4], [3, 11, 4], [0, 3, 4], [1, 10, 2]], // 106
  [[3, 8, 9], [3, 9, 10], [2, 3, 10], [6, 7, 11]], // 120
  [[9, 8, 3], [10, 9, 3], [2, 10, 3], [6, 11, 7]], // 135
  [[6, 11, 3], [4, 6, 3], [0, 4, 3], [1, 2, 10]], // 149
  [[0, 3, 8], [9, 4, 6], [9, 6, 2], [1, 9, 2]], // 154
  [[1, 5, 4], [4, 8, 3], [1, 4, 3], [6, 11, 7]], // 163
  [[0, 2, 11], [11, 7, 4], [0, 11, 4], [5, 6, 10]], // 166
  [[7, 6, 2], [8, 7, 2], [0, 8, 2], [4, 9, 5]], // 169
  [[7, 4, 9], [3, 7, 9], [1, 3, 9], [5, 6, 10]], // 172
  [[2, 11, 8], [2, 8, 9], [1, 2, 9], [5, 6, 10]], // 180
  [[0, 8, 3], [11, 7, 5], [2, 11, 5], [1, 2, 5]], // 197
  [[7, 5, 9], [3, 7, 9], [0, 3, 9], [1, 10, 2]], // 202
  [[1, 10, 11], [1, 11, 8], [0, 1, 8], [4, 5, 9]], // 210
  [[0, 8, 3], [10, 11, 7], [9, 10, 7], [4, 9, 7]], // 225
];

/// Case 12.1.1 with both faces joined.
pub(super) static TILING12_1_1_: [[[u8; 3]; 4]; 24] = [
  [[3, 11, 10], [3, 10, 9], [0, 3, 9], [4, 7, 8]], // 30
  [[0, 9, 1], [11, 10, 5], [8, 11, 5], [4, 8, 5]], // 45
  [[0, 9, 1], [10, 5, 7], [10, 7, 3], [2, 10, 3]], // 53
  [[5, 7, 8], [1, 5, 8], [0, 1, 8], [2, 3, 11]], // 58
  [[1, 10, 2], [8, 11, 6], [9, 8, 6], [5, 9, 6]], // 75
  [[6, 7, 3], [10, 6, 3], [1, 10, 3], [4, 5, 9]], // 83
  [[6, 5, 9], [2, 6, 9], [0, 2, 9], [4, 7, 8]], // 86
  [[0, 4, 5], [5, 10, 2], [0, 5, 2], [6, 7, 11]], // 89
  [[1, 3, 11], [11, 6, 5], [1, 11, 5], [4, 7, 8]], // 92
  [[0, 9, 1], [4, 8, 3], [6, 4, 3], [2, 6, 3]], // 101
  [[10, 6, 4], [1, 10, 4], [0, 1, 4], [2, 3, 11]], // 106
  [[2, 3, 11], [7, 8, 9], [7, 9, 10], [6, 7, 10]], // 120
  [[2, 11, 3], [9, 8, 7], [10, 9, 7], [6, 10, 7]], // 135
  [[6, 10, 1], [4, 6, 1], [0, 4, 1], [2, 11, 3]], // 149
  [[0, 1, 9], [8, 4, 6], [3, 8, 6], [2, 3, 6]], // 154
  [[1, 5, 6], [6, 11, 3], [1, 6, 3], [4, 8, 7]], // 163
  [[0, 2, 10], [10, 5, 4], [0, 10, 4], [6, 11, 7]], // 166
  [[5, 6, 2], [9, 5, 2], [0, 9, 2], [4, 8, 7]], // 169
  [[7, 6, 10], [3, 7, 10], [1, 3, 10], [4, 9, 5]], // 172
  [[1, 2, 10], [6, 11, 8], [6, 8, 9], [5, 6, 9]], // 180
  [[8, 7, 5], [8, 5, 1], [0, 8, 1], [2, 11, 3]], // 197
  [[0, 1, 9], [7, 5, 10], [3, 7, 10], [2, 3, 10]], // 202
  [[0, 1, 9], [5, 10, 11], [5, 11, 8], [4, 5, 8]], // 210
  [[10, 11, 3], [9, 10, 3], [0, 9, 3], [4, 8, 7]], // 225
];

/// Case 12.1.2: tunnel.
pub(super) static TILING12_1_2: [[[u8; 3]; 8]; 24] = [
  [[4, 7, 0], [0, 3, 4], [9, 4, 3], [10, 9, 3], [3, 8, 10], [8, 0, 10], [11, 10, 0], [7, 11, 0]], // 30
  [[0, 8, 5], [8, 11, 5], [9, 5, 11], [4, 9, 11], [11, 10, 4], [10, 1, 4], [5, 4, 1], [1, 0, 5]], // 45
  [[2, 10, 0], [0, 9, 2], [9, 5, 2], [5, 7, 2], [1, 2, 7], [10, 1, 7], [7, 3, 10], [3, 0, 10]], // 53
  [[0, 3, 5], [3, 8, 5], [1, 5, 8], [2, 1, 8], [11, 2, 8], [8, 0, 11], [7, 11, 0], [5, 7, 0]], // 58
  [[1, 9, 6], [9, 8, 6], [10, 6, 8], [5, 10, 8], [8, 11, 5], [11, 2, 5], [6, 5, 2], [2, 1, 6]], // 75
  [[1, 9, 6], [10, 6, 9], [9, 4, 10], [4, 7, 10], [7, 3, 10], [5, 10, 3], [6, 5, 3], [3, 1, 6]], // 83
  [[0, 2, 5], [4, 5, 2], [9, 4, 2], [2, 6, 9], [6, 7, 9], [5, 9, 7], [7, 8, 5], [8, 0, 5]], // 86
  [[6, 5, 0], [10, 6, 0], [0, 4, 10], [4, 7, 10], [5, 10, 7], [7, 11, 5], [11, 2, 5], [2, 0, 5]], // 89
  [[1, 3, 6], [3, 8, 6], [11, 6, 8], [8, 4, 11], [4, 5, 11], [5, 1, 11], [7, 11, 1], [6, 7, 1]], // 92
  [[0, 8, 6], [2, 6, 8], [1, 2, 8], [9, 1, 8], [8, 3, 9], [4, 9, 3], [6, 4, 3], [3, 0, 6]], // 101
  [[0, 3, 10], [1, 10, 3], [3, 11, 1], [11, 6, 1], [6, 4, 1], [2, 1, 4], [10, 2, 4], [4, 0, 10]], // 106
  [[6, 7, 2], [2, 3, 6], [3, 8, 6], [8, 9, 6], [11, 6, 9], [7, 11, 9], [9, 10, 7], [10, 2, 7]], // 120
  [[2, 10, 7], [10, 9, 7], [11, 7, 9], [6, 11, 9], [9, 8, 6], [8, 3, 6], [7, 6, 3], [3, 2, 7]], // 135
  [[0, 4, 10], [2, 10, 4], [1, 2, 4], [4, 6, 1], [6, 11, 1], [10, 1, 11], [11, 3, 10], [3, 0, 10]], // 149
  [[0, 3, 6], [4, 6, 3], [9, 4, 3], [1, 9, 3], [3, 8, 1], [2, 1, 8], [6, 2, 8], [8, 0, 6]], // 154
  [[7, 6, 1], [11, 7, 1], [1, 5, 11], [5, 4, 11], [6, 11, 4], [4, 8, 6], [8, 3, 6], [3, 1, 6]], // 163
  [[0, 2, 5], [2, 11, 5], [10, 5, 11], [11, 7, 10], [7, 4, 10], [4, 0, 10], [6, 10, 0], [5, 6, 0]], // 166
  [[0, 8, 5], [9, 5, 8], [8, 7, 9], [7, 6, 9], [6, 2, 9], [4, 9, 2], [5, 4, 2], [2, 0, 5]], // 169
  [[1, 3, 6], [5, 6, 3], [10, 5, 3], [3, 7, 10], [7, 4, 10], [6, 10, 4], [4, 9, 6], [9, 1, 6]], // 172
  [[5, 6, 1], [1, 2, 5], [2, 11, 5], [11, 8, 5], [10, 5, 8], [6, 10, 8], [8, 9, 6], [9, 1, 6]], // 180
  [[2, 11, 0], [0, 8, 2], [1, 2, 8], [5, 1, 8], [8, 3, 5], [3, 0, 5], [7, 5, 0], [11, 7, 0]], // 197
  [[0, 3, 10], [3, 7, 10], [1, 10, 7], [2, 1, 7], [7, 5, 2], [5, 9, 2], [10, 2, 9], [9, 0, 10]], // 202
  [[4, 5, 0], [0, 1, 4], [1, 10, 4], [10, 11, 4], [9, 4, 11], [5, 9, 11], [11, 8, 5], [8, 0, 5]], // 210
  [[0, 8, 10], [8, 3, 10], [9, 10, 3], [4, 9, 3], [7, 4, 3], [3, 0, 7], [11, 7, 0], [10, 11, 0]], // 225
];

/// Case 12.1.2 with both faces joined.
pub(super) static TILING12_1_2_: [[[u8; 3]; 8]; 24] = [
  [[4, 7, 0], [0, 3, 4], [3, 11, 4], [11, 10, 4], [8, 4, 10], [7, 8, 10], [10, 9, 7], [9, 0, 7]], // 30
  [[0, 9, 11], [9, 1, 11], [8, 11, 1], [4, 8, 1], [5, 4, 1], [1, 0, 5], [10, 5, 0], [11, 10, 0]], // 45
  [[2, 10, 0], [0, 9, 2], [3, 2, 9], [7, 3, 9], [9, 1, 7], [1, 0, 7], [5, 7, 0], [10, 5, 0]], // 53
  [[0, 1, 11], [1, 5, 11], [3, 11, 5], [2, 3, 5], [5, 7, 2], [7, 8, 2], [11, 2, 8], [8, 0, 11]], // 58
  [[1, 10, 8], [10, 2, 8], [9, 8, 2], [5, 9, 2], [6, 5, 2], [2, 1, 6], [11, 6, 1], [8, 11, 1]], // 75
  [[1, 10, 4], [9, 4, 10], [10, 6, 9], [6, 7, 9], [7, 3, 9], [5, 9, 3], [4, 5, 3], [3, 1, 4]], // 83
  [[0, 2, 7], [4, 7, 2], [8, 4, 2], [2, 6, 8], [6, 5, 8], [7, 8, 5], [5, 9, 7], [9, 0, 7]], // 86
  [[6, 7, 0], [11, 6, 0], [0, 4, 11], [4, 5, 11], [7, 11, 5], [5, 10, 7], [10, 2, 7], [2, 0, 7]], // 89
  [[1, 3, 4], [3, 11, 4], [8, 4, 11], [11, 6, 8], [6, 5, 8], [5, 1, 8], [7, 8, 1], [4, 7, 1]], // 92
  [[0, 9, 6], [2, 6, 9], [3, 2, 9], [8, 3, 9], [9, 1, 8], [4, 8, 1], [6, 4, 1], [1, 0, 6]], // 101
  [[0, 1, 11], [3, 11, 1], [1, 10, 3], [10, 6, 3], [6, 4, 3], [2, 3, 4], [11, 2, 4], [4, 0, 11]], // 106
  [[6, 7, 2], [2, 3, 6], [10, 6, 3], [9, 10, 3], [3, 11, 9], [11, 2, 9], [8, 9, 2], [7, 8, 2]], // 120
  [[2, 11, 9], [11, 3, 9], [10, 9, 3], [6, 10, 3], [7, 6, 3], [3, 2, 7], [8, 7, 2], [9, 8, 2]], // 135
  [[0, 4, 11], [2, 11, 4], [3, 2, 4], [4, 6, 3], [6, 10, 3], [11, 3, 10], [10, 1, 11], [1, 0, 11]], // 149
  [[0, 1, 6], [4, 6, 1], [8, 4, 1], [3, 8, 1], [1, 9, 3], [2, 3, 9], [6, 2, 9], [9, 0, 6]], // 154
  [[7, 4, 1], [8, 7, 1], [1, 5, 8], [5, 6, 8], [4, 8, 6], [6, 11, 4], [11, 3, 4], [3, 1, 4]], // 163
  [[6, 11, 0], [7, 6, 0], [0, 2, 7], [2, 10, 7], [11, 7, 10], [10, 5, 11], [5, 4, 11], [4, 0, 11]], // 166
  [[0, 9, 7], [8, 7, 9], [9, 5, 8], [5, 6, 8], [6, 2, 8], [4, 8, 2], [7, 4, 2], [2, 0, 7]], // 169
  [[1, 3, 4], [5, 4, 3], [9, 5, 3], [3, 7, 9], [7, 6, 9], [4, 9, 6], [6, 10, 4], [10, 1, 4]], // 172
  [[5, 6, 1], [1, 2, 5], [9, 5, 2], [8, 9, 2], [2, 10, 8], [10, 1, 8], [11, 8, 1], [6, 11, 1]], // 180
  [[2, 11, 0], [0, 8, 2], [8, 7, 2], [7, 5, 2], [3, 2, 5], [11, 3, 5], [5, 1, 11], [1, 0, 11]], // 197
  [[0, 1, 7], [1, 9, 7], [3, 7, 9], [2, 3, 9], [10, 2, 9], [9, 0, 10], [5, 10, 0], [7, 5, 0]], // 202
  [[4, 5, 0], [0, 1, 4], [8, 4, 1], [11, 8, 1], [1, 9, 11], [9, 0, 11], [10, 11, 0], [5, 10, 0]], // 210
  [[0, 9, 7], [9, 10, 7], [8, 7, 10], [4, 8, 10], [10, 11, 4], [11, 3, 4], [7, 4, 3], [3, 0, 7]], // 225
];

/// Case 12.2, first face joined.
pub(super) static TILING12_2: [[[u8; 3]; 8]; 24] = [
  [[0, 3, 12], [3, 8, 12], [8, 4, 12], [4, 7, 12], [7, 11, 12], [11, 10, 12], [10, 9, 12], [9, 0, 12]], // 30
  [[0, 9, 12], [9, 5, 12], [5, 4, 12], [4, 8, 12], [8, 11, 12], [11, 10, 12], [10, 1, 12], [1, 0, 12]], // 45
  [[0, 9, 12], [9, 1, 12], [1, 2, 12], [2, 10, 12], [10, 5, 12], [5, 7, 12], [7, 3, 12], [3, 0, 12]], // 53
  [[0, 3, 12], [3, 11, 12], [11, 2, 12], [2, 1, 12], [1, 5, 12], [5, 7, 12], [7, 8, 12], [8, 0, 12]], // 58
  [[1, 10, 12], [10, 6, 12], [6, 5, 12], [5, 9, 12], [9, 8, 12], [8, 11, 12], [11, 2, 12], [2, 1, 12]], // 75
  [[1, 10, 12], [10, 6, 12], [6, 5, 12], [5, 9, 12], [9, 4, 12], [4, 7, 12], [7, 3, 12], [3, 1, 12]], // 83
  [[0, 2, 12], [2, 6, 12], [6, 7, 12], [7, 8, 12], [8, 4, 12], [4, 5, 12], [5, 9, 12], [9, 0, 12]], // 86
  [[0, 4, 12], [4, 7, 12], [7, 11, 12], [11, 6, 12], [6, 5, 12], [5, 10, 12], [10, 2, 12], [2, 0, 12]], // 89
  [[1, 3, 12], [3, 11, 12], [11, 6, 12], [6, 7, 12], [7, 8, 12], [8, 4, 12], [4, 5, 12], [5, 1, 12]], // 92
  [[0, 9, 12], [9, 1, 12], [1, 2, 12], [2, 6, 12], [6, 4, 12], [4, 8, 12], [8, 3, 12], [3, 0, 12]], // 101
  [[0, 3, 12], [3, 11, 12], [11, 2, 12], [2, 1, 12], [1, 10, 12], [10, 6, 12], [6, 4, 12], [4, 0, 12]], // 106
  [[2, 3, 12], [3, 8, 12], [8, 9, 12], [9, 10, 12], [10, 6, 12], [6, 7, 12], [7, 11, 12], [11, 2, 12]], // 120
  [[2, 11, 12], [11, 7, 12], [7, 6, 12], [6, 10, 12], [10, 9, 12], [9, 8, 12], [8, 3, 12], [3, 2, 12]], // 135
  [[0, 4, 12], [4, 6, 12], [6, 10, 12], [10, 1, 12], [1, 2, 12], [2, 11, 12], [11, 3, 12], [3, 0, 12]], // 149
  [[0, 3, 12], [3, 8, 12], [8, 4, 12], [4, 6, 12], [6, 2, 12], [2, 1, 12], [1, 9, 12], [9, 0, 12]], // 154
  [[1, 5, 12], [5, 4, 12], [4, 8, 12], [8, 7, 12], [7, 6, 12], [6, 11, 12], [11, 3, 12], [3, 1, 12]], // 163
  [[0, 2, 12], [2, 10, 12], [10, 5, 12], [5, 6, 12], [6, 11, 12], [11, 7, 12], [7, 4, 12], [4, 0, 12]], // 166
  [[0, 9, 12], [9, 5, 12], [5, 4, 12], [4, 8, 12], [8, 7, 12], [7, 6, 12], [6, 2, 12], [2, 0, 12]], // 169
  [[1, 3, 12], [3, 7, 12], [7, 4, 12], [4, 9, 12], [9, 5, 12], [5, 6, 12], [6, 10, 12], [10, 1, 12]], // 172
  [[1, 2, 12], [2, 11, 12], [11, 8, 12], [8, 9, 12], [9, 5, 12], [5, 6, 12], [6, 10, 12], [10, 1, 12]], // 180
  [[0, 8, 12], [8, 7, 12], [7, 5, 12], [5, 1, 12], [1, 2, 12], [2, 11, 12], [11, 3, 12], [3, 0, 12]], // 197
  [[0, 3, 12], [3, 7, 12], [7, 5, 12], [5, 10, 12], [10, 2, 12], [2, 1, 12], [1, 9, 12], [9, 0, 12]], // 202
  [[0, 1, 12], [1, 10, 12], [10, 11, 12], [11, 8, 12], [8, 4, 12], [4, 5, 12], [5, 9, 12], [9, 0, 12]], // 210
  [[0, 9, 12], [9, 10, 12], [10, 11, 12], [11, 7, 12], [7, 4, 12], [4, 8, 12], [8, 3, 12], [3, 0, 12]], // 225
];

/// Case 12.2, second face joined.
pub(super) static TILING12_2_: [[[u8; 3]; 8]; 24] = [
  [[0, 3, 12], [3, 11, 12], [11, 10, 12], [10, 9, 12], [9, 4, 12], [4, 7, 12], [7, 8, 12], [8, 0, 12]], // 30
  [[0, 8, 12], [8, 11, 12], [11, 10, 12], [10, 5, 12], [5, 4, 12], [4, 9, 12], [9, 1, 12], [1, 0, 12]], // 45
  [[0, 9, 12], [9, 5, 12], [5, 7, 12], [7, 3, 12], [3, 2, 12], [2, 10, 12], [10, 1, 12], [1, 0, 12]], // 53
  [[0, 1, 12], [1, 5, 12], [5, 7, 12], [7, 11, 12], [11, 2, 12], [2, 3, 12], [3, 8, 12], [8, 0, 12]], // 58
  [[1, 9, 12], [9, 8, 12], [8, 11, 12], [11, 6, 12], [6, 5, 12], [5, 10, 12], [10, 2, 12], [2, 1, 12]], // 75
  [[1, 9, 12], [9, 4, 12], [4, 5, 12], [5, 10, 12], [10, 6, 12], [6, 7, 12], [7, 3, 12], [3, 1, 12]], // 83
  [[0, 2, 12], [2, 6, 12], [6, 5, 12], [5, 9, 12], [9, 4, 12], [4, 7, 12], [7, 8, 12], [8, 0, 12]], // 86
  [[0, 4, 12], [4, 5, 12], [5, 10, 12], [10, 6, 12], [6, 7, 12], [7, 11, 12], [11, 2, 12], [2, 0, 12]], // 89
  [[1, 3, 12], [3, 8, 12], [8, 4, 12], [4, 7, 12], [7, 11, 12], [11, 6, 12], [6, 5, 12], [5, 1, 12]], // 92
  [[0, 8, 12], [8, 3, 12], [3, 2, 12], [2, 6, 12], [6, 4, 12], [4, 9, 12], [9, 1, 12], [1, 0, 12]], // 101
  [[0, 1, 12], [1, 10, 12], [10, 2, 12], [2, 3, 12], [3, 11, 12], [11, 6, 12], [6, 4, 12], [4, 0, 12]], // 106
  [[2, 3, 12], [3, 11, 12], [11, 6, 12], [6, 7, 12], [7, 8, 12], [8, 9, 12], [9, 10, 12], [10, 2, 12]], // 120
  [[2, 10, 12], [10, 9, 12], [9, 8, 12], [8, 7, 12], [7, 6, 12], [6, 11, 12], [11, 3, 12], [3, 2, 12]], // 135
  [[0, 4, 12], [4, 6, 12], [6, 11, 12], [11, 3, 12], [3, 2, 12], [2, 10, 12], [10, 1, 12], [1, 0, 12]], // 149
  [[0, 1, 12], [1, 9, 12], [9, 4, 12], [4, 6, 12], [6, 2, 12], [2, 3, 12], [3, 8, 12], [8, 0, 12]], // 154
  [[1, 5, 12], [5, 6, 12], [6, 11, 12], [11, 7, 12], [7, 4, 12], [4, 8, 12], [8, 3, 12], [3, 1, 12]], // 163
  [[0, 2, 12], [2, 11, 12], [11, 7, 12], [7, 6, 12], [6, 10, 12], [10, 5, 12], [5, 4, 12], [4, 0, 12]], // 166
  [[0, 8, 12], [8, 7, 12], [7, 4, 12], [4, 9, 12], [9, 5, 12], [5, 6, 12], [6, 2, 12], [2, 0, 12]], // 169
  [[1, 3, 12], [3, 7, 12], [7, 6, 12], [6, 10, 12], [10, 5, 12], [5, 4, 12], [4, 9, 12], [9, 1, 12]], // 172
  [[1, 2, 12], [2, 10, 12], [10, 5, 12], [5, 6, 12], [6, 11, 12], [11, 8, 12], [8, 9, 12], [9, 1, 12]], // 180
  [[0, 8, 12], [8, 3, 12], [3, 2, 12], [2, 11, 12], [11, 7, 12], [7, 5, 12], [5, 1, 12], [1, 0, 12]], // 197
  [[0, 1, 12], [1, 10, 12], [10, 2, 12], [2, 3, 12], [3, 7, 12], [7, 5, 12], [5, 9, 12], [9, 0, 12]], // 202
  [[0, 1, 12], [1, 9, 12], [9, 4, 12], [4, 5, 12], [5, 10, 12], [10, 11, 12], [11, 8, 12], [8, 0, 12]], // 210
  [[0, 8, 12], [8, 7, 12], [7, 4, 12], [4, 9, 12], [9, 10, 12], [10, 11, 12], [11, 3, 12], [3, 0, 12]], // 225
];

/// Case 13: six faces then the 13.5 interior sign.
pub(super) static TEST13: [[i8; 7]; 2] = [
  [-1, -2, -3, -4, -5, -6, 1], // 90
  [1, 2, 3, 4, 5, 6, 1], // 165
];

/// Case 13: face-test bits (bit `i` = face `i` joined) to the 46 canonical
/// subcases; `-1` marks patterns no trilinear field can produce.
pub(super) static SUBCONFIG13: [i8; 64] = [
   0,  1,  2,  7,  3, -1,  8, -1,
   4,  9, -1, -1, 10, -1, -1, -1,
   5, 11, 12, 23, 13, -1, 19, 27,
  14, 20, -1, 28, 24, 29, 30, 39,
   6, 15, 16, 21, 17, -1, 25, 31,
  18, 26, -1, 32, 22, 33, 34, 40,
  -1, -1, -1, 35, -1, -1, 36, 41,
  -1, 37, -1, 42, 38, 43, 44, 45,
];

/// Case 13.1.
pub(super) static TILING13_1: [[[u8; 3]; 4]; 2] = [
  [[0, 3, 8], [1, 10, 2], [4, 5, 9], [6, 7, 11]], // 90
  [[0, 8, 3], [1, 2, 10], [4, 9, 5], [6, 11, 7]], // 165
];

/// Case 13.1 with every face joined.
pub(super) static TILING13_1_: [[[u8; 3]; 4]; 2] = [
  [[0, 1, 9], [2, 3, 11], [4, 7, 8], [5, 10, 6]], // 90
  [[0, 9, 1], [2, 11, 3], [4, 8, 7], [5, 6, 10]], // 165
];

/// Case 13.2.
pub(super) static TILING13_2: [[[[u8; 3]; 6]; 6]; 2] = [
  // 90
  [
    [[8, 4, 5], [3, 8, 5], [3, 5, 9], [0, 3, 9], [1, 10, 2], [6, 7, 11]],
    [[0, 3, 8], [5, 10, 2], [4, 5, 2], [9, 4, 2], [1, 9, 2], [6, 7, 11]],
    [[0, 3, 8], [10, 6, 7], [1, 10, 7], [7, 11, 2], [1, 7, 2], [4, 5, 9]],
    [[3, 11, 6], [0, 3, 6], [6, 7, 8], [0, 6, 8], [1, 10, 2], [4, 5, 9]],
    [[2, 3, 8], [10, 2, 8], [1, 10, 8], [0, 1, 8], [4, 5, 9], [6, 7, 11]],
    [[0, 3, 8], [1, 10, 2], [6, 5, 9], [11, 6, 9], [7, 11, 9], [4, 7, 9]],
  ],
  // 165
  [
    [[4, 8, 3], [5, 4, 3], [9, 5, 3], [0, 9, 3], [1, 2, 10], [6, 11, 7]],
    [[0, 8, 3], [10, 5, 4], [2, 10, 4], [2, 4, 9], [1, 2, 9], [6, 11, 7]],
    [[0, 8, 3], [2, 11, 7], [1, 2, 7], [7, 6, 10], [1, 7, 10], [4, 9, 5]],
    [[8, 7, 6], [0, 8, 6], [6, 11, 3], [0, 6, 3], [1, 2, 10], [4, 9, 5]],
    [[3, 2, 10], [8, 3, 10], [8, 10, 1], [0, 8, 1], [4, 9, 5], [6, 11, 7]],
    [[0, 8, 3], [1, 2, 10], [5, 6, 11], [9, 5, 11], [9, 11, 7], [4, 9, 7]],
  ],
];

/// Case 13.2 mirrored.
pub(super) static TILING13_2_: [[[[u8; 3]; 6]; 6]; 2] = [
  // 90
  [
    [[0, 1, 9], [2, 3, 11], [6, 7, 8], [10, 6, 8], [5, 10, 8], [4, 5, 8]],
    [[2, 1, 9], [11, 2, 9], [3, 11, 9], [0, 3, 9], [4, 7, 8], [5, 10, 6]],
    [[0, 1, 9], [3, 8, 4], [2, 3, 4], [4, 7, 11], [2, 4, 11], [5, 10, 6]],
    [[0, 1, 9], [11, 6, 5], [3, 11, 5], [3, 5, 10], [2, 3, 10], [4, 7, 8]],
    [[1, 10, 6], [0, 1, 6], [6, 5, 9], [0, 6, 9], [2, 3, 11], [4, 7, 8]],
    [[9, 4, 7], [1, 9, 7], [1, 7, 8], [0, 1, 8], [2, 3, 11], [5, 10, 6]],
  ],
  // 165
  [
    [[0, 9, 1], [2, 11, 3], [7, 6, 10], [8, 7, 10], [8, 10, 5], [4, 8, 5]],
    [[1, 2, 11], [9, 1, 11], [9, 11, 3], [0, 9, 3], [4, 8, 7], [5, 6, 10]],
    [[0, 9, 1], [11, 7, 4], [2, 11, 4], [4, 8, 3], [2, 4, 3], [5, 6, 10]],
    [[0, 9, 1], [6, 11, 3], [5, 6, 3], [10, 5, 3], [2, 10, 3], [4, 8, 7]],
    [[9, 5, 6], [0, 9, 6], [6, 10, 1], [0, 6, 1], [2, 11, 3], [4, 8, 7]],
    [[4, 9, 1], [7, 4, 1], [8, 7, 1], [0, 8, 1], [2, 11, 3], [5, 6, 10]],
  ],
];

/// Case 13.3.
pub(super) static TILING13_3: [[[[u8; 3]; 10]; 12]; 2] = [
  // 90
  [
    [[0, 3, 12], [3, 8, 12], [8, 4, 12], [4, 5, 12], [5, 10, 12], [10, 2, 12], [2, 1, 12], [1, 9, 12], [9, 0, 12], [6, 7, 11]],
    [[0, 3, 8], [1, 9, 12], [9, 4, 12], [4, 5, 12], [5, 10, 12], [10, 6, 12], [6, 7, 12], [7, 11, 12], [11, 2, 12], [2, 1, 12]],
    [[0, 3, 12], [3, 11, 12], [11, 6, 12], [6, 7, 12], [7, 8, 12], [8, 4, 12], [4, 5, 12], [5, 9, 12], [9, 0, 12], [1, 10, 2]],
    [[0, 3, 12], [3, 11, 12], [11, 2, 12], [2, 1, 12], [1, 10, 12], [10, 6, 12], [6, 7, 12], [7, 8, 12], [8, 0, 12], [4, 5, 9]],
    [[0, 1, 12], [1, 10, 12], [10, 2, 12], [2, 3, 12], [3, 8, 12], [8, 4, 12], [4, 5, 12], [5, 9, 12], [9, 0, 12], [6, 7, 11]],
    [[0, 1, 12], [1, 9, 12], [9, 4, 12], [4, 5, 12], [5, 10, 12], [10, 2, 12], [2, 3, 12], [3, 8, 12], [8, 0, 12], [6, 7, 11]],
    [[0, 1, 12], [1, 10, 12], [10, 6, 12], [6, 7, 12], [7, 11, 12], [11, 2, 12], [2, 3, 12], [3, 8, 12], [8, 0, 12], [4, 5, 9]],
    [[0, 1, 12], [1, 10, 12], [10, 2, 12], [2, 3, 12], [3, 11, 12], [11, 6, 12], [6, 7, 12], [7, 8, 12], [8, 0, 12], [4, 5, 9]],
    [[0, 3, 12], [3, 8, 12], [8, 4, 12], [4, 7, 12], [7, 11, 12], [11, 6, 12], [6, 5, 12], [5, 9, 12], [9, 0, 12], [1, 10, 2]],
    [[0, 3, 8], [1, 9, 12], [9, 4, 12], [4, 7, 12], [7, 11, 12], [11, 6, 12], [6, 5, 12], [5, 10, 12], [10, 2, 12], [2, 1, 12]],
    [[0, 3, 8], [1, 10, 12], [10, 6, 12], [6, 5, 12], [5, 9, 12], [9, 4, 12], [4, 7, 12], [7, 11, 12], [11, 2, 12], [2, 1, 12]],
    [[0, 3, 12], [3, 11, 12], [11, 6, 12], [6, 5, 12], [5, 9, 12], [9, 4, 12], [4, 7, 12], [7, 8, 12], [8, 0, 12], [1, 10, 2]],
  ],
  // 165
  [
    [[0, 9, 12], [9, 1, 12], [1, 2, 12], [2, 10, 12], [10, 5, 12], [5, 4, 12], [4, 8, 12], [8, 3, 12], [3, 0, 12], [6, 11, 7]],
    [[0, 8, 3], [1, 2, 12], [2, 11, 12], [11, 7, 12], [7, 6, 12], [6, 10, 12], [10, 5, 12], [5, 4, 12], [4, 9, 12], [9, 1, 12]],
    [[0, 9, 12], [9, 5, 12], [5, 4, 12], [4, 8, 12], [8, 7, 12], [7, 6, 12], [6, 11, 12], [11, 3, 12], [3, 0, 12], [1, 2, 10]],
    [[0, 8, 12], [8, 7, 12], [7, 6, 12], [6, 10, 12], [10, 1, 12], [1, 2, 12], [2, 11, 12], [11, 3, 12], [3, 0, 12], [4, 9, 5]],
    [[0, 9, 12], [9, 5, 12], [5, 4, 12], [4, 8, 12], [8, 3, 12], [3, 2, 12], [2, 10, 12], [10, 1, 12], [1, 0, 12], [6, 11, 7]],
    [[0, 8, 12], [8, 3, 12], [3, 2, 12], [2, 10, 12], [10, 5, 12], [5, 4, 12], [4, 9, 12], [9, 1, 12], [1, 0, 12], [6, 11, 7]],
    [[0, 8, 12], [8, 3, 12], [3, 2, 12], [2, 11, 12], [11, 7, 12], [7, 6, 12], [6, 10, 12], [10, 1, 12], [1, 0, 12], [4, 9, 5]],
    [[0, 8, 12], [8, 7, 12], [7, 6, 12], [6, 11, 12], [11, 3, 12], [3, 2, 12], [2, 10, 12], [10, 1, 12], [1, 0, 12], [4, 9, 5]],
    [[0, 9, 12], [9, 5, 12], [5, 6, 12], [6, 11, 12], [11, 7, 12], [7, 4, 12], [4, 8, 12], [8, 3, 12], [3, 0, 12], [1, 2, 10]],
    [[0, 8, 3], [1, 2, 12], [2, 10, 12], [10, 5, 12], [5, 6, 12], [6, 11, 12], [11, 7, 12], [7, 4, 12], [4, 9, 12], [9, 1, 12]],
    [[0, 8, 3], [1, 2, 12], [2, 11, 12], [11, 7, 12], [7, 4, 12], [4, 9, 12], [9, 5, 12], [5, 6, 12], [6, 10, 12], [10, 1, 12]],
    [[0, 8, 12], [8, 7, 12], [7, 4, 12], [4, 9, 12], [9, 5, 12], [5, 6, 12], [6, 11, 12], [11, 3, 12], [3, 0, 12], [1, 2, 10]],
  ],
];

/// Case 13.3 mirrored.
pub(super) static TILING13_3_: [[[[u8; 3]; 10]; 12]; 2] = [
  // 90
  [
    [[0, 1, 9], [2, 3, 12], [3, 8, 12], [8, 4, 12], [4, 5, 12], [5, 10, 12], [10, 6, 12], [6, 7, 12], [7, 11, 12], [11, 2, 12]],
    [[0, 1, 9], [2, 3, 12], [3, 11, 12], [11, 6, 12], [6, 7, 12], [7, 8, 12], [8, 4, 12], [4, 5, 12], [5, 10, 12], [10, 2, 12]],
    [[0, 1, 12], [1, 10, 12], [10, 6, 12], [6, 7, 12], [7, 8, 12], [8, 4, 12], [4, 5, 12], [5, 9, 12], [9, 0, 12], [2, 3, 11]],
    [[0, 1, 12], [1, 9, 12], [9, 4, 12], [4, 5, 12], [5, 10, 12], [10, 6, 12], [6, 7, 12], [7, 8, 12], [8, 0, 12], [2, 3, 11]],
    [[0, 3, 12], [3, 8, 12], [8, 4, 12], [4, 7, 12], [7, 11, 12], [11, 2, 12], [2, 1, 12], [1, 9, 12], [9, 0, 12], [5, 10, 6]],
    [[0, 3, 12], [3, 11, 12], [11, 6, 12], [6, 5, 12], [5, 10, 12], [10, 2, 12], [2, 1, 12], [1, 9, 12], [9, 0, 12], [4, 7, 8]],
    [[0, 3, 12], [3, 11, 12], [11, 2, 12], [2, 1, 12], [1, 10, 12], [10, 6, 12], [6, 5, 12], [5, 9, 12], [9, 0, 12], [4, 7, 8]],
    [[0, 3, 12], [3, 11, 12], [11, 2, 12], [2, 1, 12], [1, 9, 12], [9, 4, 12], [4, 7, 12], [7, 8, 12], [8, 0, 12], [5, 10, 6]],
    [[0, 1, 9], [2, 3, 12], [3, 8, 12], [8, 4, 12], [4, 7, 12], [7, 11, 12], [11, 6, 12], [6, 5, 12], [5, 10, 12], [10, 2, 12]],
    [[0, 1, 12], [1, 9, 12], [9, 4, 12], [4, 7, 12], [7, 11, 12], [11, 2, 12], [2, 3, 12], [3, 8, 12], [8, 0, 12], [5, 10, 6]],
    [[0, 1, 12], [1, 10, 12], [10, 2, 12], [2, 3, 12], [3, 11, 12], [11, 6, 12], [6, 5, 12], [5, 9, 12], [9, 0, 12], [4, 7, 8]],
    [[0, 1, 12], [1, 10, 12], [10, 6, 12], [6, 5, 12], [5, 9, 12], [9, 4, 12], [4, 7, 12], [7, 8, 12], [8, 0, 12], [2, 3, 11]],
  ],
  // 165
  [
    [[0, 9, 1], [2, 11, 12], [11, 7, 12], [7, 6, 12], [6, 10, 12], [10, 5, 12], [5, 4, 12], [4, 8, 12], [8, 3, 12], [3, 2, 12]],
    [[0, 9, 1], [2, 10, 12], [10, 5, 12], [5, 4, 12], [4, 8, 12], [8, 7, 12], [7, 6, 12], [6, 11, 12], [11, 3, 12], [3, 2, 12]],
    [[0, 9, 12], [9, 5, 12], [5, 4, 12], [4, 8, 12], [8, 7, 12], [7, 6, 12], [6, 10, 12], [10, 1, 12], [1, 0, 12], [2, 11, 3]],
    [[0, 8, 12], [8, 7, 12], [7, 6, 12], [6, 10, 12], [10, 5, 12], [5, 4, 12], [4, 9, 12], [9, 1, 12], [1, 0, 12], [2, 11, 3]],
    [[0, 9, 12], [9, 1, 12], [1, 2, 12], [2, 11, 12], [11, 7, 12], [7, 4, 12], [4, 8, 12], [8, 3, 12], [3, 0, 12], [5, 6, 10]],
    [[0, 9, 12], [9, 1, 12], [1, 2, 12], [2, 10, 12], [10, 5, 12], [5, 6, 12], [6, 11, 12], [11, 3, 12], [3, 0, 12], [4, 8, 7]],
    [[0, 9, 12], [9, 5, 12], [5, 6, 12], [6, 10, 12], [10, 1, 12], [1, 2, 12], [2, 11, 12], [11, 3, 12], [3, 0, 12], [4, 8, 7]],
    [[0, 8, 12], [8, 7, 12], [7, 4, 12], [4, 9, 12], [9, 1, 12], [1, 2, 12], [2, 11, 12], [11, 3, 12], [3, 0, 12], [5, 6, 10]],
    [[0, 9, 1], [2, 10, 12], [10, 5, 12], [5, 6, 12], [6, 11, 12], [11, 7, 12], [7, 4, 12], [4, 8, 12], [8, 3, 12], [3, 2, 12]],
    [[0, 8, 12], [8, 3, 12], [3, 2, 12], [2, 11, 12], [11, 7, 12], [7, 4, 12], [4, 9, 12], [9, 1, 12], [1, 0, 12], [5, 6, 10]],
    [[0, 9, 12], [9, 5, 12], [5, 6, 12], [6, 11, 12], [11, 3, 12], [3, 2, 12], [2, 10, 12], [10, 1, 12], [1, 0, 12], [4, 8, 7]],
    [[0, 8, 12], [8, 7, 12], [7, 4, 12], [4, 9, 12], [9, 5, 12], [5, 6, 12], [6, 10, 12], [10, 1, 12], [1, 0, 12], [2, 11, 3]],
  ],
];

/// Case 13.4.
pub(super) static TILING13_4: [[[[u8; 3]; 12]; 4]; 2] = [
  // 90
  [
    [[0, 1, 12], [1, 9, 12], [9, 4, 12], [4, 5, 12], [5, 10, 12], [10, 6, 12], [6, 7, 12], [7, 11, 12], [11, 2, 12], [2, 3, 12], [3, 8, 12], [8, 0, 12]],
    [[0, 1, 12], [1, 10, 12], [10, 2, 12], [2, 3, 12], [3, 11, 12], [11, 6, 12], [6, 7, 12], [7, 8, 12], [8, 4, 12], [4, 5, 12], [5, 9, 12], [9, 0, 12]],
    [[0, 3, 12], [3, 8, 12], [8, 4, 12], [4, 7, 12], [7, 11, 12], [11, 6, 12], [6, 5, 12], [5, 10, 12], [10, 2, 12], [2, 1, 12], [1, 9, 12], [9, 0, 12]],
    [[0, 3, 12], [3, 11, 12], [11, 2, 12], [2, 1, 12], [1, 10, 12], [10, 6, 12], [6, 5, 12], [5, 9, 12], [9, 4, 12], [4, 7, 12], [7, 8, 12], [8, 0, 12]],
  ],
  // 165
  [
    [[0, 8, 12], [8, 3, 12], [3, 2, 12], [2, 11, 12], [11, 7, 12], [7, 6, 12], [6, 10, 12], [10, 5, 12], [5, 4, 12], [4, 9, 12], [9, 1, 12], [1, 0, 12]],
    [[0, 9, 12], [9, 5, 12], [5, 4, 12], [4, 8, 12], [8, 7, 12], [7, 6, 12], [6, 11, 12], [11, 3, 12], [3, 2, 12], [2, 10, 12], [10, 1, 12], [1, 0, 12]],
    [[0, 9, 12], [9, 1, 12], [1, 2, 12], [2, 10, 12], [10, 5, 12], [5, 6, 12], [6, 11, 12], [11, 7, 12], [7, 4, 12], [4, 8, 12], [8, 3, 12], [3, 0, 12]],
    [[0, 8, 12], [8, 7, 12], [7, 4, 12], [4, 9, 12], [9, 5, 12], [5, 6, 12], [6, 10, 12], [10, 1, 12], [1, 2, 12], [2, 11, 12], [11, 3, 12], [3, 0, 12]],
  ],
];

/// Case 13.5.1; the first edge is the interior-test edge.
pub(super) static TILING13_5_1: [[[[u8; 3]; 6]; 4]; 2] = [
  // 90
  [
    [[0, 1, 9], [3, 8, 4], [4, 5, 10], [3, 4, 10], [2, 3, 10], [6, 7, 11]],
    [[2, 3, 11], [1, 10, 6], [6, 7, 8], [1, 6, 8], [0, 1, 8], [4, 5, 9]],
    [[5, 10, 6], [0, 3, 8], [9, 4, 7], [7, 11, 2], [9, 7, 2], [1, 9, 2]],
    [[4, 7, 8], [3, 11, 6], [6, 5, 9], [3, 6, 9], [0, 3, 9], [1, 10, 2]],
  ],
  // 165
  [
    [[6, 11, 7], [0, 9, 1], [10, 5, 4], [4, 8, 3], [10, 4, 3], [2, 10, 3]],
    [[4, 9, 5], [8, 7, 6], [6, 10, 1], [8, 6, 1], [0, 8, 1], [2, 11, 3]],
    [[0, 8, 3], [2, 11, 7], [7, 4, 9], [2, 7, 9], [1, 2, 9], [5, 6, 10]],
    [[1, 2, 10], [9, 5, 6], [6, 11, 3], [9, 6, 3], [0, 9, 3], [4, 8, 7]],
  ],
];

/// Case 13.5.2: tunnel.
pub(super) static TILING13_5_2: [[[[u8; 3]; 10]; 4]; 2] = [
  // 90
  [
    [[0, 1, 9], [6, 7, 2], [2, 3, 6], [3, 8, 6], [11, 6, 8], [8, 4, 11], [4, 5, 11], [7, 11, 5], [5, 10, 7], [10, 2, 7]],
    [[2, 3, 11], [4, 5, 0], [0, 1, 4], [1, 10, 4], [9, 4, 10], [10, 6, 9], [6, 7, 9], [5, 9, 7], [7, 8, 5], [8, 0, 5]],
    [[5, 10, 6], [4, 7, 0], [0, 3, 4], [9, 4, 3], [1, 9, 3], [3, 8, 1], [2, 1, 8], [11, 2, 8], [8, 0, 11], [7, 11, 0]],
    [[1, 10, 2], [4, 7, 0], [0, 3, 4], [3, 11, 4], [8, 4, 11], [11, 6, 8], [6, 5, 8], [7, 8, 5], [5, 9, 7], [9, 0, 7]],
  ],
  // 165
  [
    [[0, 9, 1], [2, 10, 7], [11, 7, 10], [10, 5, 11], [5, 4, 11], [6, 11, 4], [4, 8, 6], [8, 3, 6], [7, 6, 3], [3, 2, 7]],
    [[2, 11, 3], [0, 8, 5], [9, 5, 8], [8, 7, 9], [7, 6, 9], [4, 9, 6], [6, 10, 4], [10, 1, 4], [5, 4, 1], [1, 0, 5]],
    [[5, 6, 10], [2, 11, 0], [0, 8, 2], [1, 2, 8], [9, 1, 8], [8, 3, 9], [4, 9, 3], [7, 4, 3], [3, 0, 7], [11, 7, 0]],
    [[1, 2, 10], [0, 9, 7], [8, 7, 9], [9, 5, 8], [5, 6, 8], [4, 8, 6], [6, 11, 4], [11, 3, 4], [7, 4, 3], [3, 0, 7]],
  ],
];

/// Case 14.
pub(super) static TILING14: [[[u8; 3]; 4]; 12] = [
  [[4, 7, 11], [11, 10, 1], [4, 11, 1], [0, 4, 1]], // 29
  [[5, 4, 8], [8, 11, 2], [5, 8, 2], [1, 5, 2]], // 43
  [[2, 10, 5], [5, 7, 8], [2, 5, 8], [0, 2, 8]], // 54
  [[6, 5, 9], [9, 8, 3], [6, 9, 3], [2, 6, 3]], // 71
  [[3, 11, 6], [6, 4, 9], [3, 6, 9], [1, 3, 9]], // 108
  [[6, 7, 3], [10, 6, 3], [9, 10, 3], [0, 9, 3]], // 113
  [[6, 10, 9], [7, 6, 9], [3, 7, 9], [0, 3, 9]], // 142
  [[6, 11, 3], [4, 6, 3], [9, 4, 3], [1, 9, 3]], // 147
  [[9, 5, 6], [8, 9, 6], [3, 8, 6], [2, 3, 6]], // 184
  [[5, 10, 2], [7, 5, 2], [8, 7, 2], [0, 8, 2]], // 201
  [[8, 4, 5], [11, 8, 5], [2, 11, 5], [1, 2, 5]], // 212
  [[11, 7, 4], [10, 11, 4], [1, 10, 4], [0, 1, 4]], // 226
];
