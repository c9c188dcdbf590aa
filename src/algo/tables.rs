//! Coefficient tables for the kernels and the higher-order series.
//!
//! Power series tables are exact Taylor coefficients in `u = (x/2)²`,
//! rounded to f64; `H(k)` is the k-th harmonic number.
//!
//! Chebyshev tables are fitted offline at 40 significant digits and
//! truncated once terms fall below 2e-18 of the leading coefficient. The
//! leading coefficient is stored halved (see `utils::chebyshev`).
//!
//! The auxiliary functions `P_ν`, `Q_ν` of the Hankel expansion are defined by
//! `J_ν = √(2/πx)·(P cos χ - Q sin χ)`, `Y_ν = √(2/πx)·(P sin χ + Q cos χ)`
//! with `χ = x - (2ν+1)π/4`.

// Fitted values are kept at round-trip precision.
#![allow(clippy::excessive_precision)]
#![allow(clippy::unreadable_literal)]

// ── Power series, x < 2 ──

/// J0(x) = sum (-u)^k / (k!)^2, u = (x/2)^2.
#[rustfmt::skip]
pub(crate) const J0_SERIES: [f64; 15] = [
    1.0,
    -1.0,
    0.25,
    -0.027777777777777776,
    0.001736111111111111,
    -6.944444444444444e-05,
    1.9290123456790124e-06,
    -3.936759889140842e-08,
    6.151187326782565e-10,
    -7.594058428126624e-12,
    7.594058428126623e-14,
    -6.276081345559193e-16,
    4.358389823304995e-18,
    -2.5789288895295828e-20,
    1.3157800456783586e-22,
];

/// J1(x) / (x/2) = sum (-u)^k / (k! (k+1)!).
#[rustfmt::skip]
pub(crate) const J1_SERIES: [f64; 15] = [
    1.0,
    -0.5,
    0.08333333333333333,
    -0.006944444444444444,
    0.00034722222222222224,
    -1.1574074074074073e-05,
    2.755731922398589e-07,
    -4.920949861426052e-09,
    6.834652585313961e-11,
    -7.594058428126623e-13,
    6.903689480115112e-15,
    -5.230067787965994e-17,
    3.352607556388458e-19,
    -1.842092063949702e-21,
    8.771866971189057e-24,
];

/// Harmonic companion of J0: sum (-1)^k H(k+1) u^k / ((k+1)!)^2.
#[rustfmt::skip]
pub(crate) const Y0_SERIES: [f64; 14] = [
    1.0,
    -0.375,
    0.05092592592592592,
    -0.003616898148148148,
    0.0001585648148148148,
    -4.72608024691358e-06,
    1.0207455998272325e-07,
    -1.6718048413148328e-09,
    2.1483350211950277e-11,
    -2.224275605476294e-13,
    1.895299587006153e-15,
    -1.3525001839484812e-17,
    8.201338813682637e-20,
    -4.278340826570208e-22,
];

/// Harmonic companion of J1: sum (-u)^k (H(k) + H(k+1)) / (k! (k+1)!).
#[rustfmt::skip]
pub(crate) const Y1_SERIES: [f64; 15] = [
    1.0,
    -1.25,
    0.2777777777777778,
    -0.027199074074074073,
    0.0015162037037037036,
    -5.4783950617283953e-05,
    1.3896762408667172e-06,
    -2.613375872835907e-08,
    3.791062453869784e-10,
    -4.3726106266713215e-12,
    4.106898277957945e-14,
    -3.202416543243305e-16,
    2.1065588026621898e-18,
    -1.1847776309828747e-20,
    5.762933548568204e-23,
];

/// I0(x) = sum u^k / (k!)^2.
#[rustfmt::skip]
pub(crate) const I0_SERIES: [f64; 15] = [
    1.0,
    1.0,
    0.25,
    0.027777777777777776,
    0.001736111111111111,
    6.944444444444444e-05,
    1.9290123456790124e-06,
    3.936759889140842e-08,
    6.151187326782565e-10,
    7.594058428126624e-12,
    7.594058428126623e-14,
    6.276081345559193e-16,
    4.358389823304995e-18,
    2.5789288895295828e-20,
    1.3157800456783586e-22,
];

/// I1(x) / (x/2) = sum u^k / (k! (k+1)!).
#[rustfmt::skip]
pub(crate) const I1_SERIES: [f64; 15] = [
    1.0,
    0.5,
    0.08333333333333333,
    0.006944444444444444,
    0.00034722222222222224,
    1.1574074074074073e-05,
    2.755731922398589e-07,
    4.920949861426052e-09,
    6.834652585313961e-11,
    7.594058428126623e-13,
    6.903689480115112e-15,
    5.230067787965994e-17,
    3.352607556388458e-19,
    1.842092063949702e-21,
    8.771866971189057e-24,
];

/// Harmonic companion of I0: sum H(k+1) u^k / ((k+1)!)^2.
#[rustfmt::skip]
pub(crate) const K0_SERIES: [f64; 14] = [
    1.0,
    0.375,
    0.05092592592592592,
    0.003616898148148148,
    0.0001585648148148148,
    4.72608024691358e-06,
    1.0207455998272325e-07,
    1.6718048413148328e-09,
    2.1483350211950277e-11,
    2.224275605476294e-13,
    1.895299587006153e-15,
    1.3525001839484812e-17,
    8.201338813682637e-20,
    4.278340826570208e-22,
];

/// Harmonic companion of I1: sum u^k (H(k) + H(k+1)) / (k! (k+1)!).
#[rustfmt::skip]
pub(crate) const K1_SERIES: [f64; 15] = [
    1.0,
    1.25,
    0.2777777777777778,
    0.027199074074074073,
    0.0015162037037037036,
    5.4783950617283953e-05,
    1.3896762408667172e-06,
    2.613375872835907e-08,
    3.791062453869784e-10,
    4.3726106266713215e-12,
    4.106898277957945e-14,
    3.202416543243305e-16,
    2.1065588026621898e-18,
    1.1847776309828747e-20,
    5.762933548568204e-23,
];

// ── Ordinary, x ≥ 2 ──

/// P0(x) on x >= 2, Chebyshev in t = 4/x - 1.
#[rustfmt::skip]
pub(crate) const P0_CHEB: [f64; 28] = [
    0.9945328421743971,
    -0.007045604761914115,
    -0.0014229491014675656,
    0.00015630928025361614,
    -2.6593048916720895e-06,
    -2.7187116462561885e-06,
    6.844135604713496e-07,
    -8.161075020933458e-08,
    -5.695293211283894e-09,
    6.1039516033204336e-09,
    -1.884290318027554e-09,
    3.3728531820090705e-10,
    -4.77794415966306e-12,
    -2.4346767745970153e-11,
    1.1683243275078659e-11,
    -3.457517741253179e-12,
    6.210239606004279e-13,
    2.600351828445054e-14,
    -8.016887838224732e-14,
    4.167163933172077e-14,
    -1.448990883606685e-14,
    3.452765378534269e-15,
    -2.53792838441424e-16,
    -2.92989439880102e-16,
    2.177756567810781e-16,
    -9.868546528062281e-17,
    3.324855788239718e-17,
    -7.589344052688518e-18,
];

/// Q0(x) / (2/x) on x >= 2, Chebyshev in t = 4/x - 1.
#[rustfmt::skip]
pub(crate) const Q0_CHEB: [f64; 34] = [
    -0.060017658607719473,
    0.0031186750663131854,
    0.0005219015954445777,
    -0.00010933960355797024,
    7.657555259076587e-06,
    1.6752790961145829e-06,
    -7.452213584787816e-07,
    1.4629767814058674e-07,
    -8.24698841960535e-09,
    -6.1037006692976995e-09,
    2.995959973542701e-09,
    -8.027118849066093e-10,
    1.1167566595521608e-10,
    1.875946213166818e-11,
    -1.978954675612277e-11,
    8.23233495560807e-12,
    -2.2676872736914807e-12,
    3.2725491216493677e-13,
    7.858825289472865e-14,
    -8.50871671802001e-14,
    4.069838912897551e-14,
    -1.3693493184268762e-14,
    3.0433668921557507e-15,
    -3.224227122862955e-17,
    -4.139387300639839e-16,
    2.775371294925577e-16,
    -1.2364975349354703e-16,
    4.134872475590021e-17,
    -9.039280125495207e-18,
    -3.46367259976134e-19,
    1.7409017866348803e-18,
    -1.1969549052229312e-18,
    5.745192209528704e-19,
    -2.1476587205751756e-19,
];

/// P1(x) on x >= 2, Chebyshev in t = 4/x - 1.
#[rustfmt::skip]
pub(crate) const P1_CHEB: [f64; 28] = [
    1.0094860031506094,
    0.012317308904779665,
    0.002617670537073075,
    -0.00021711607216421118,
    1.1145036986052927e-06,
    3.6909657228288593e-06,
    -8.339548124481927e-07,
    8.913776023492824e-08,
    8.870574603247647e-09,
    -7.3687269322808346e-09,
    2.147371115629023e-09,
    -3.6143244350399366e-10,
    -2.3035315745897855e-12,
    2.8929593476162792e-11,
    -1.3149126765172395e-11,
    3.757431683184379e-12,
    -6.374003518821732e-13,
    -4.5499882710103365e-14,
    9.181847926638645e-14,
    -4.58781776783088e-14,
    1.5546465482120066e-14,
    -3.576494698694109e-15,
    2.0178807605480283e-16,
    3.3890032455557764e-16,
    -2.390911591703443e-16,
    1.0591892348007591e-16,
    -3.4957452324796466e-17,
    7.688940647092014e-18,
];

/// Q1(x) / (2/x) on x >= 2, Chebyshev in t = 4/x - 1.
#[rustfmt::skip]
pub(crate) const Q1_CHEB: [f64; 33] = [
    0.18389391358189947,
    -0.00456320045116891,
    -0.0008085585245012578,
    0.00014350005301363116,
    -8.390245052724118e-06,
    -2.271984005347496e-06,
    9.018352759674469e-07,
    -1.6575482076473377e-07,
    7.098175502393442e-09,
    7.504665086545802e-09,
    -3.4390653757549727e-09,
    8.840390148856137e-10,
    -1.1349083498971389e-10,
    -2.4377589403054208e-11,
    2.2552191887672428e-11,
    -9.062436520831463e-12,
    2.4203680499278057e-12,
    -3.2266646501602413e-13,
    -9.738622343051034e-14,
    9.503781771193158e-14,
    -4.419849831151851e-14,
    1.4540339814946187e-14,
    -3.1117549146273847e-15,
    -3.6063446894597526e-17,
    4.660020456835788e-16,
    -3.013769406404571e-16,
    1.3175674570081487e-16,
    -4.322935929337759e-17,
    9.087623576376387e-18,
    6.030382956043941e-19,
    -1.926817939327174e-18,
    1.2865478876903784e-18,
    -6.078749295734668e-19,
];

// ── Modified I, x ≥ 2 ──

/// I0(x) exp(-x) on [2, 6], t = (x - 4) / 2.
#[rustfmt::skip]
pub(crate) const I0_CHEB_A: [f64; 22] = [
    0.22131917674818413,
    -0.06685256797865531,
    0.01523489793972231,
    -0.0038215191639228386,
    0.0009708078337826526,
    -0.00023887699818074383,
    5.55028527885056e-05,
    -1.2019515341692966e-05,
    2.4129729177959034e-06,
    -4.4863333381117956e-07,
    7.735975403364701e-08,
    -1.2403614372637075e-08,
    1.8549874824186242e-09,
    -2.5960323372887145e-10,
    3.410797142775868e-11,
    -4.220074125723619e-12,
    4.931359720712567e-13,
    -5.457269788562459e-14,
    5.733790814636563e-15,
    -5.732986001400991e-16,
    5.466785893880166e-17,
    -4.9815595688275696e-18,
];

/// I0(x) exp(-x) on [6, 12], t = (x - 9) / 3.
#[rustfmt::skip]
pub(crate) const I0_CHEB_B: [f64; 23] = [
    0.13817369334829813,
    -0.024612940095977427,
    0.0032890672057085315,
    -0.0004898043217302397,
    7.692112205609206e-05,
    -1.2496137379169681e-05,
    2.08208207775277e-06,
    -3.541081470642325e-07,
    6.12264538388976e-08,
    -1.0709633279210442e-08,
    1.8830395474544782e-09,
    -3.302788874760166e-10,
    5.7326614510086684e-11,
    -9.77295089852367e-12,
    1.6260142092660656e-12,
    -2.6272170115426874e-13,
    4.107530205252126e-14,
    -6.1991881179074084e-15,
    9.018339725612641e-16,
    -1.2636814582886183e-16,
    1.7052116335560337e-17,
    -2.2162644768999178e-18,
    2.7755748394897885e-19,
];

/// I0(x) exp(-x) on [12, 24], t = (x - 18) / 6.
#[rustfmt::skip]
pub(crate) const I0_CHEB_C: [f64; 23] = [
    0.0968774049899999,
    -0.016948140438681404,
    0.002219235254237585,
    -0.0003228593885022618,
    4.93367995947839e-05,
    -7.758891443256188e-06,
    1.243609691988373e-06,
    -2.0206987798852375e-07,
    3.317773029693461e-08,
    -5.49307317168512e-09,
    9.158079053322999e-10,
    -1.536050509281392e-10,
    2.5902817655473705e-11,
    -4.389951410947177e-12,
    7.475766797830563e-13,
    -1.2791238546586437e-13,
    2.1991567608435524e-14,
    -3.799598547514254e-15,
    6.597821734553594e-16,
    -1.15142757175852e-16,
    2.018995966477682e-17,
    -3.554965804821681e-18,
    6.278965122463576e-19,
];

/// I0(x) exp(-x) sqrt(x) on x >= 24, t = 48/x - 1.
#[rustfmt::skip]
pub(crate) const I0_CHEB_D: [f64; 11] = [
    0.40000015522218263,
    0.0010643166700832671,
    6.516188474831275e-06,
    7.563120277919034e-08,
    1.3225280590322252e-09,
    3.138557946743435e-11,
    9.529200726549211e-13,
    3.565773433510378e-14,
    1.603343748652829e-15,
    8.510365688494888e-17,
    5.265492412404303e-18,
];

/// I1(x) exp(-x) on [2, 6], t = (x - 4) / 2.
#[rustfmt::skip]
pub(crate) const I1_CHEB_A: [f64; 23] = [
    0.18151926442440228,
    -0.03214642352111047,
    0.0024876412708139404,
    0.0004148294141773847,
    -0.00031189134335720135,
    0.00011424024478886926,
    -3.2811333447629136e-05,
    8.080610896886522e-06,
    -1.7646059264880738e-06,
    3.477095624010794e-07,
    -6.25190859497142e-08,
    1.0341741503151733e-08,
    -1.5840944019347699e-09,
    2.259028530364461e-10,
    -3.0131874450306475e-11,
    3.774412650972447e-12,
    -4.4559802013960936e-13,
    4.9738525670333246e-14,
    -5.264337340611443e-15,
    5.296902923596041e-16,
    -5.0786893647322536e-17,
    4.650154154842472e-18,
    -4.074045000908604e-19,
];

/// I1(x) exp(-x) on [6, 12], t = (x - 9) / 3.
#[rustfmt::skip]
pub(crate) const I1_CHEB_B: [f64; 22] = [
    0.12945788912964554,
    -0.020013726265649765,
    0.002266085499054989,
    -0.00027601343234728723,
    3.35480588630288e-05,
    -3.828240145796024e-06,
    3.6281014858845535e-07,
    -1.453922470165632e-08,
    -5.5407890256654395e-09,
    2.3182019425785264e-09,
    -6.264036418459127e-10,
    1.4395935128309577e-10,
    -3.007139996618254e-11,
    5.852371779895236e-12,
    -1.073092479798017e-12,
    1.8646835744802543e-13,
    -3.081437546887379e-14,
    4.854315257493276e-15,
    -7.303782125498233e-16,
    1.051275588366538e-16,
    -1.4496888276610565e-17,
    1.9178890478112047e-18,
];

/// I1(x) exp(-x) on [12, 24], t = (x - 18) / 6.
#[rustfmt::skip]
pub(crate) const I1_CHEB_C: [f64; 23] = [
    0.09388457520051334,
    -0.015400289016484167,
    0.0018829558214915835,
    -0.0002544981357967487,
    3.5916755351044475e-05,
    -5.180038197454961e-06,
    7.550511870092556e-07,
    -1.1043601616404238e-07,
    1.6115607291039138e-08,
    -2.3331588056960255e-09,
    3.329044144921942e-10,
    -4.638370271337822e-11,
    6.2178468852117854e-12,
    -7.798738180810223e-13,
    8.572869029223564e-14,
    -6.525964920639432e-15,
    -2.944945530633101e-16,
    2.9846141938788823e-16,
    -9.522155212936765e-17,
    2.422416899413425e-17,
    -5.5763038062209075e-18,
    1.2122292666524305e-18,
    -2.536063249996047e-19,
];

/// I1(x) exp(-x) sqrt(x) on x >= 24, t = 48/x - 1.
#[rustfmt::skip]
pub(crate) const I1_CHEB_D: [f64; 11] = [
    0.3957941310298723,
    -0.003158788351567962,
    -1.0742044821266622e-05,
    -1.0470913203606524e-07,
    -1.6811617430257505e-09,
    -3.7917322301516596e-11,
    -1.112891863640968e-12,
    -4.0646732721311614e-14,
    -1.7946262281940047e-15,
    -9.39059195385345e-17,
    -5.743485928315419e-18,
];

// ── Modified K, x ≥ 2 ──

/// K0(x) exp(x) sqrt(x) on x >= 2, t = 4/x - 1.
#[rustfmt::skip]
pub(crate) const K0_CHEB: [f64; 25] = [
    1.2201515410329777,
    -0.0314481013119645,
    0.0015698838857300533,
    -0.00012849549581627802,
    1.39498137188765e-05,
    -1.8317555227191195e-06,
    2.766813639445015e-07,
    -4.660489897687948e-08,
    8.574034017414225e-09,
    -1.6975345093890614e-09,
    3.5773972814003283e-10,
    -7.957489244477396e-11,
    1.8559491149549264e-11,
    -4.514597883374519e-12,
    1.1403405882073441e-12,
    -2.9800969231481784e-13,
    8.032890775068375e-14,
    -2.2275133267462965e-14,
    6.340076476276646e-15,
    -1.848593377920907e-15,
    5.5120559994043335e-16,
    -1.6782311257549006e-16,
    5.2103917776435543e-17,
    -1.6475805939842632e-17,
    5.3004337711773354e-18,
];

/// K1(x) exp(x) sqrt(x) on x >= 2, t = 4/x - 1.
#[rustfmt::skip]
pub(crate) const K1_CHEB: [f64; 25] = [
    1.3603130952422213,
    0.10392373657681724,
    -0.002857816859622779,
    0.00019521551847135162,
    -1.936197974166083e-05,
    2.406484947837217e-06,
    -3.5019606030878126e-07,
    5.7410841254500495e-08,
    -1.0345762465678097e-08,
    2.0150497551970347e-09,
    -4.1903547593419254e-10,
    9.218315187605315e-11,
    -2.129967838427791e-11,
    5.139639673482343e-12,
    -1.2891739609498229e-12,
    3.348419666052243e-13,
    -8.976705182010146e-14,
    2.4771544242195988e-14,
    -7.0198370892147685e-15,
    2.038703166239861e-15,
    -6.057047270643018e-16,
    1.8380935752430455e-16,
    -5.689462849193648e-17,
    1.7940510478863572e-17,
    -5.7567444820733025e-18,
];

// ── Higher orders ──

/// 1/n! for n = 0..=100, correctly rounded.
#[rustfmt::skip]
pub(crate) const INV_FACTORIAL: [f64; 101] = [
    1.0,
    1.0,
    0.5,
    0.16666666666666666,
    0.041666666666666664,
    0.008333333333333333,
    0.001388888888888889,
    0.0001984126984126984,
    2.48015873015873e-05,
    2.7557319223985893e-06,
    2.755731922398589e-07,
    2.505210838544172e-08,
    2.08767569878681e-09,
    1.6059043836821613e-10,
    1.1470745597729725e-11,
    7.647163731819816e-13,
    4.779477332387385e-14,
    2.8114572543455206e-15,
    1.5619206968586225e-16,
    8.22063524662433e-18,
    4.110317623312165e-19,
    1.9572941063391263e-20,
    8.896791392450574e-22,
    3.868170170630684e-23,
    1.6117375710961184e-24,
    6.446950284384474e-26,
    2.4795962632247976e-27,
    9.183689863795546e-29,
    3.279889237069838e-30,
    1.1309962886447716e-31,
    3.7699876288159054e-33,
    1.216125041553518e-34,
    3.8003907548547434e-36,
    1.151633562077195e-37,
    3.387157535521162e-39,
    9.67759295863189e-41,
    2.6882202662866363e-42,
    7.265460179153071e-44,
    1.911963205040282e-45,
    4.902469756513544e-47,
    1.2256174391283858e-48,
    2.9893108271424046e-50,
    7.117406731291439e-52,
    1.6552108677421951e-53,
    3.7618428812322616e-55,
    8.359650847182804e-57,
    1.817315401561479e-58,
    3.866628513960594e-60,
    8.055476070751236e-62,
    1.643974708316579e-63,
    3.287949416633158e-65,
    6.446959640457172e-67,
    1.2397999308571486e-68,
    2.3392451525606576e-70,
    4.331935467704922e-72,
    7.876246304918039e-74,
    1.4064725544496498e-75,
    2.4674957095607893e-77,
    4.254302947518602e-79,
    7.2106829618959365e-81,
    1.2017804936493226e-82,
    1.9701319568021682e-84,
    3.1776321883905942e-86,
    5.043860616493007e-88,
    7.881032213270323e-90,
    1.2124664943492804e-91,
    1.8370704459837581e-93,
    2.74189618803546e-95,
    4.0322002765227353e-97,
    5.843768516699616e-99,
    8.34824073814231e-101,
    1.1758085546679308e-102,
    1.633067437038793e-104,
    2.2370786808750587e-106,
    3.023079298479809e-108,
    4.030772397973079e-110,
    5.30364789206984e-112,
    6.887854405285506e-114,
    8.830582570878855e-116,
    1.117795262136564e-117,
    1.397244077670705e-119,
    1.7249926884823517e-121,
    2.103649620100429e-123,
    2.53451761457883e-125,
    3.0172828744986073e-127,
    3.5497445582336554e-129,
    4.127609951434483e-131,
    4.7443792545223946e-133,
    5.3913400619572666e-135,
    6.057685462873333e-137,
    6.730761625414815e-139,
    7.396441346609687e-141,
    8.039610159358355e-143,
    8.64474210683694e-145,
    9.196534156209511e-147,
    9.680562269694223e-149,
    1.0083919030931482e-150,
    1.039579281539328e-152,
    1.0607951852442122e-154,
    1.071510288125467e-156,
    1.071510288125467e-158,
];
