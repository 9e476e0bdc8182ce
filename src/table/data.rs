//! Embedded Umm al-Qura year tables.
//!
//! One row per Hijri year: the month-length mask (bit 0 = Muharram, set = 30 days)
//! and the Gregorian date of 1 Muharram. The last row of each table is the
//! sentinel marking one day past the supported range.

use super::PackedYear;

/// Hijri 1276 through 1500. Years from 1318 onward match the .NET BCL table.
pub(crate) const UMM_AL_QURA: [PackedYear; 226] = [
    PackedYear::new(0x0D55, 1859, 7, 30), // 1276
    PackedYear::new(0x0555, 1860, 7, 19), // 1277
    PackedYear::new(0x0D55, 1861, 7, 8), // 1278
    PackedYear::new(0x0555, 1862, 6, 28), // 1279
    PackedYear::new(0x0555, 1863, 6, 17), // 1280
    PackedYear::new(0x0D55, 1864, 6, 5), // 1281
    PackedYear::new(0x0555, 1865, 5, 26), // 1282
    PackedYear::new(0x0555, 1866, 5, 15), // 1283
    PackedYear::new(0x0D55, 1867, 5, 4), // 1284
    PackedYear::new(0x0555, 1868, 4, 23), // 1285
    PackedYear::new(0x0D55, 1869, 4, 12), // 1286
    PackedYear::new(0x0555, 1870, 4, 2), // 1287
    PackedYear::new(0x0555, 1871, 3, 22), // 1288
    PackedYear::new(0x0D55, 1872, 3, 10), // 1289
    PackedYear::new(0x0555, 1873, 2, 28), // 1290
    PackedYear::new(0x0555, 1874, 2, 17), // 1291
    PackedYear::new(0x0D55, 1875, 2, 6), // 1292
    PackedYear::new(0x0555, 1876, 1, 27), // 1293
    PackedYear::new(0x0555, 1877, 1, 15), // 1294
    PackedYear::new(0x0D55, 1878, 1, 4), // 1295
    PackedYear::new(0x0555, 1878, 12, 25), // 1296
    PackedYear::new(0x0D55, 1879, 12, 14), // 1297
    PackedYear::new(0x0555, 1880, 12, 3), // 1298
    PackedYear::new(0x0555, 1881, 11, 22), // 1299
    PackedYear::new(0x054B, 1882, 11, 11), // 1300
    PackedYear::new(0x0C97, 1883, 10, 31), // 1301
    PackedYear::new(0x092E, 1884, 10, 20), // 1302
    PackedYear::new(0x026E, 1885, 10, 9), // 1303
    PackedYear::new(0x056D, 1886, 9, 28), // 1304
    PackedYear::new(0x0AEA, 1887, 9, 18), // 1305
    PackedYear::new(0x06D2, 1888, 9, 7), // 1306
    PackedYear::new(0x06A5, 1889, 8, 27), // 1307
    PackedYear::new(0x052D, 1890, 8, 16), // 1308
    PackedYear::new(0x025B, 1891, 8, 5), // 1309
    PackedYear::new(0x04BB, 1892, 7, 24), // 1310
    PackedYear::new(0x09BA, 1893, 7, 14), // 1311
    PackedYear::new(0x03B4, 1894, 7, 4), // 1312
    PackedYear::new(0x0BA9, 1895, 6, 23), // 1313
    PackedYear::new(0x0B52, 1896, 6, 12), // 1314
    PackedYear::new(0x0AA5, 1897, 6, 1), // 1315
    PackedYear::new(0x052D, 1898, 5, 21), // 1316
    // Published as 0x0B6D (356 days); the epoch gap to 1318 is 355 days.
    PackedYear::new(0x036D, 1899, 5, 10), // 1317
    PackedYear::new(0x02EA, 1900, 4, 30), // 1318
    PackedYear::new(0x06E9, 1901, 4, 19), // 1319
    PackedYear::new(0x0ED2, 1902, 4, 9), // 1320
    PackedYear::new(0x0EA4, 1903, 3, 30), // 1321
    PackedYear::new(0x0D4A, 1904, 3, 18), // 1322
    PackedYear::new(0x0A96, 1905, 3, 7), // 1323
    PackedYear::new(0x0536, 1906, 2, 24), // 1324
    PackedYear::new(0x0AB5, 1907, 2, 13), // 1325
    PackedYear::new(0x0DAA, 1908, 2, 3), // 1326
    PackedYear::new(0x0BA4, 1909, 1, 23), // 1327
    PackedYear::new(0x0B49, 1910, 1, 12), // 1328
    PackedYear::new(0x0A93, 1911, 1, 1), // 1329
    PackedYear::new(0x052B, 1911, 12, 21), // 1330
    PackedYear::new(0x0A57, 1912, 12, 9), // 1331
    PackedYear::new(0x04B6, 1913, 11, 29), // 1332
    PackedYear::new(0x0AB5, 1914, 11, 18), // 1333
    PackedYear::new(0x05AA, 1915, 11, 8), // 1334
    PackedYear::new(0x0D55, 1916, 10, 27), // 1335
    PackedYear::new(0x0D2A, 1917, 10, 17), // 1336
    PackedYear::new(0x0A56, 1918, 10, 6), // 1337
    PackedYear::new(0x04AE, 1919, 9, 25), // 1338
    PackedYear::new(0x095D, 1920, 9, 13), // 1339
    PackedYear::new(0x02EC, 1921, 9, 3), // 1340
    PackedYear::new(0x06D5, 1922, 8, 23), // 1341
    PackedYear::new(0x06AA, 1923, 8, 13), // 1342
    PackedYear::new(0x0555, 1924, 8, 1), // 1343
    PackedYear::new(0x04AB, 1925, 7, 21), // 1344
    PackedYear::new(0x095B, 1926, 7, 10), // 1345
    PackedYear::new(0x02BA, 1927, 6, 30), // 1346
    PackedYear::new(0x0575, 1928, 6, 18), // 1347
    PackedYear::new(0x0BB2, 1929, 6, 8), // 1348
    PackedYear::new(0x0764, 1930, 5, 29), // 1349
    PackedYear::new(0x0749, 1931, 5, 18), // 1350
    PackedYear::new(0x0655, 1932, 5, 6), // 1351
    PackedYear::new(0x02AB, 1933, 4, 25), // 1352
    PackedYear::new(0x055B, 1934, 4, 14), // 1353
    PackedYear::new(0x0ADA, 1935, 4, 4), // 1354
    PackedYear::new(0x06D4, 1936, 3, 24), // 1355
    PackedYear::new(0x0EC9, 1937, 3, 13), // 1356
    PackedYear::new(0x0D92, 1938, 3, 3), // 1357
    PackedYear::new(0x0D25, 1939, 2, 20), // 1358
    PackedYear::new(0x0A4D, 1940, 2, 9), // 1359
    PackedYear::new(0x02AD, 1941, 1, 28), // 1360
    PackedYear::new(0x056D, 1942, 1, 17), // 1361
    PackedYear::new(0x0B6A, 1943, 1, 7), // 1362
    PackedYear::new(0x0B52, 1943, 12, 28), // 1363
    PackedYear::new(0x0AA5, 1944, 12, 16), // 1364
    PackedYear::new(0x0A4B, 1945, 12, 5), // 1365
    PackedYear::new(0x0497, 1946, 11, 24), // 1366
    PackedYear::new(0x0937, 1947, 11, 13), // 1367
    PackedYear::new(0x02B6, 1948, 11, 2), // 1368
    PackedYear::new(0x0575, 1949, 10, 22), // 1369
    PackedYear::new(0x0D6A, 1950, 10, 12), // 1370
    PackedYear::new(0x0D52, 1951, 10, 2), // 1371
    PackedYear::new(0x0A96, 1952, 9, 20), // 1372
    PackedYear::new(0x092D, 1953, 9, 9), // 1373
    PackedYear::new(0x025D, 1954, 8, 29), // 1374
    PackedYear::new(0x04DD, 1955, 8, 18), // 1375
    PackedYear::new(0x0ADA, 1956, 8, 7), // 1376
    PackedYear::new(0x05D4, 1957, 7, 28), // 1377
    PackedYear::new(0x0DA9, 1958, 7, 17), // 1378
    PackedYear::new(0x0D52, 1959, 7, 7), // 1379
    PackedYear::new(0x0AAA, 1960, 6, 25), // 1380
    PackedYear::new(0x04D6, 1961, 6, 14), // 1381
    PackedYear::new(0x09B6, 1962, 6, 3), // 1382
    PackedYear::new(0x0374, 1963, 5, 24), // 1383
    PackedYear::new(0x0769, 1964, 5, 12), // 1384
    PackedYear::new(0x0752, 1965, 5, 2), // 1385
    PackedYear::new(0x06A5, 1966, 4, 21), // 1386
    PackedYear::new(0x054B, 1967, 4, 10), // 1387
    PackedYear::new(0x0AAB, 1968, 3, 29), // 1388
    PackedYear::new(0x055A, 1969, 3, 19), // 1389
    PackedYear::new(0x0AD5, 1970, 3, 8), // 1390
    PackedYear::new(0x0DD2, 1971, 2, 26), // 1391
    PackedYear::new(0x0DA4, 1972, 2, 16), // 1392
    PackedYear::new(0x0D49, 1973, 2, 4), // 1393
    PackedYear::new(0x0A95, 1974, 1, 24), // 1394
    PackedYear::new(0x052D, 1975, 1, 13), // 1395
    PackedYear::new(0x0A5D, 1976, 1, 2), // 1396
    PackedYear::new(0x055A, 1976, 12, 22), // 1397
    PackedYear::new(0x0AD5, 1977, 12, 11), // 1398
    PackedYear::new(0x06AA, 1978, 12, 1), // 1399
    PackedYear::new(0x0695, 1979, 11, 20), // 1400
    PackedYear::new(0x052B, 1980, 11, 8), // 1401
    PackedYear::new(0x0A57, 1981, 10, 28), // 1402
    PackedYear::new(0x04AE, 1982, 10, 18), // 1403
    PackedYear::new(0x0976, 1983, 10, 7), // 1404
    PackedYear::new(0x056C, 1984, 9, 26), // 1405
    PackedYear::new(0x0B55, 1985, 9, 15), // 1406
    PackedYear::new(0x0AAA, 1986, 9, 5), // 1407
    PackedYear::new(0x0A55, 1987, 8, 25), // 1408
    PackedYear::new(0x04AD, 1988, 8, 13), // 1409
    PackedYear::new(0x095D, 1989, 8, 2), // 1410
    PackedYear::new(0x02DA, 1990, 7, 23), // 1411
    PackedYear::new(0x05D9, 1991, 7, 12), // 1412
    PackedYear::new(0x0DB2, 1992, 7, 1), // 1413
    PackedYear::new(0x0BA4, 1993, 6, 21), // 1414
    PackedYear::new(0x0B4A, 1994, 6, 10), // 1415
    PackedYear::new(0x0A55, 1995, 5, 30), // 1416
    PackedYear::new(0x02B5, 1996, 5, 18), // 1417
    PackedYear::new(0x0575, 1997, 5, 7), // 1418
    PackedYear::new(0x0B6A, 1998, 4, 27), // 1419
    PackedYear::new(0x0BD2, 1999, 4, 17), // 1420
    PackedYear::new(0x0BC4, 2000, 4, 6), // 1421
    PackedYear::new(0x0B89, 2001, 3, 26), // 1422
    PackedYear::new(0x0A95, 2002, 3, 15), // 1423
    PackedYear::new(0x052D, 2003, 3, 4), // 1424
    PackedYear::new(0x05AD, 2004, 2, 21), // 1425
    PackedYear::new(0x0B6A, 2005, 2, 10), // 1426
    PackedYear::new(0x06D4, 2006, 1, 31), // 1427
    PackedYear::new(0x0DC9, 2007, 1, 20), // 1428
    PackedYear::new(0x0D92, 2008, 1, 10), // 1429
    PackedYear::new(0x0AA6, 2008, 12, 29), // 1430
    PackedYear::new(0x0956, 2009, 12, 18), // 1431
    PackedYear::new(0x02AE, 2010, 12, 7), // 1432
    PackedYear::new(0x056D, 2011, 11, 26), // 1433
    PackedYear::new(0x036A, 2012, 11, 15), // 1434
    PackedYear::new(0x0B55, 2013, 11, 4), // 1435
    PackedYear::new(0x0AAA, 2014, 10, 25), // 1436
    PackedYear::new(0x094D, 2015, 10, 14), // 1437
    PackedYear::new(0x049D, 2016, 10, 2), // 1438
    PackedYear::new(0x095D, 2017, 9, 21), // 1439
    PackedYear::new(0x02BA, 2018, 9, 11), // 1440
    PackedYear::new(0x05B5, 2019, 8, 31), // 1441
    PackedYear::new(0x05AA, 2020, 8, 20), // 1442
    PackedYear::new(0x0D55, 2021, 8, 9), // 1443
    PackedYear::new(0x0A9A, 2022, 7, 30), // 1444
    PackedYear::new(0x092E, 2023, 7, 19), // 1445
    PackedYear::new(0x026E, 2024, 7, 7), // 1446
    PackedYear::new(0x055D, 2025, 6, 26), // 1447
    PackedYear::new(0x0ADA, 2026, 6, 16), // 1448
    PackedYear::new(0x06D4, 2027, 6, 6), // 1449
    PackedYear::new(0x06A5, 2028, 5, 25), // 1450
    PackedYear::new(0x054B, 2029, 5, 14), // 1451
    PackedYear::new(0x0A97, 2030, 5, 3), // 1452
    PackedYear::new(0x054E, 2031, 4, 23), // 1453
    PackedYear::new(0x0AAE, 2032, 4, 11), // 1454
    PackedYear::new(0x05AC, 2033, 4, 1), // 1455
    PackedYear::new(0x0BA9, 2034, 3, 21), // 1456
    PackedYear::new(0x0D92, 2035, 3, 11), // 1457
    PackedYear::new(0x0B25, 2036, 2, 28), // 1458
    PackedYear::new(0x064B, 2037, 2, 16), // 1459
    PackedYear::new(0x0CAB, 2038, 2, 5), // 1460
    PackedYear::new(0x055A, 2039, 1, 26), // 1461
    PackedYear::new(0x0B55, 2040, 1, 15), // 1462
    PackedYear::new(0x06D2, 2041, 1, 4), // 1463
    PackedYear::new(0x0EA5, 2041, 12, 24), // 1464
    PackedYear::new(0x0E4A, 2042, 12, 14), // 1465
    PackedYear::new(0x0A95, 2043, 12, 3), // 1466
    PackedYear::new(0x052D, 2044, 11, 21), // 1467
    PackedYear::new(0x0AAD, 2045, 11, 10), // 1468
    PackedYear::new(0x036C, 2046, 10, 31), // 1469
    PackedYear::new(0x0759, 2047, 10, 20), // 1470
    PackedYear::new(0x06D2, 2048, 10, 9), // 1471
    PackedYear::new(0x0695, 2049, 9, 28), // 1472
    PackedYear::new(0x052D, 2050, 9, 17), // 1473
    PackedYear::new(0x0A5B, 2051, 9, 6), // 1474
    PackedYear::new(0x04BA, 2052, 8, 26), // 1475
    PackedYear::new(0x09BA, 2053, 8, 15), // 1476
    PackedYear::new(0x03B4, 2054, 8, 5), // 1477
    PackedYear::new(0x0B69, 2055, 7, 25), // 1478
    PackedYear::new(0x0B52, 2056, 7, 14), // 1479
    PackedYear::new(0x0AA6, 2057, 7, 3), // 1480
    PackedYear::new(0x04B6, 2058, 6, 22), // 1481
    PackedYear::new(0x096D, 2059, 6, 11), // 1482
    PackedYear::new(0x02EC, 2060, 5, 31), // 1483
    PackedYear::new(0x06D9, 2061, 5, 20), // 1484
    PackedYear::new(0x0EB2, 2062, 5, 10), // 1485
    PackedYear::new(0x0D54, 2063, 4, 30), // 1486
    PackedYear::new(0x0D2A, 2064, 4, 18), // 1487
    PackedYear::new(0x0A56, 2065, 4, 7), // 1488
    PackedYear::new(0x04AE, 2066, 3, 27), // 1489
    PackedYear::new(0x096D, 2067, 3, 16), // 1490
    PackedYear::new(0x0D6A, 2068, 3, 5), // 1491
    PackedYear::new(0x0B54, 2069, 2, 23), // 1492
    PackedYear::new(0x0B29, 2070, 2, 12), // 1493
    PackedYear::new(0x0A93, 2071, 2, 1), // 1494
    PackedYear::new(0x052B, 2072, 1, 21), // 1495
    PackedYear::new(0x0A57, 2073, 1, 9), // 1496
    PackedYear::new(0x0536, 2073, 12, 30), // 1497
    PackedYear::new(0x0AB5, 2074, 12, 19), // 1498
    PackedYear::new(0x06AA, 2075, 12, 9), // 1499
    PackedYear::new(0x0E93, 2076, 11, 27), // 1500
    PackedYear::new(0x0000, 2077, 11, 17), // 1501
];

/// Hijri 1318 through 1500, the range of the first published table.
pub(crate) const LEGACY: [PackedYear; 184] = [
    PackedYear::new(0x02EA, 1900, 4, 30), // 1318
    PackedYear::new(0x06E9, 1901, 4, 19), // 1319
    PackedYear::new(0x0ED2, 1902, 4, 9), // 1320
    PackedYear::new(0x0EA4, 1903, 3, 30), // 1321
    PackedYear::new(0x0D4A, 1904, 3, 18), // 1322
    PackedYear::new(0x0A96, 1905, 3, 7), // 1323
    PackedYear::new(0x0536, 1906, 2, 24), // 1324
    PackedYear::new(0x0AB5, 1907, 2, 13), // 1325
    PackedYear::new(0x0DAA, 1908, 2, 3), // 1326
    PackedYear::new(0x0BA4, 1909, 1, 23), // 1327
    PackedYear::new(0x0B49, 1910, 1, 12), // 1328
    PackedYear::new(0x0A93, 1911, 1, 1), // 1329
    PackedYear::new(0x052B, 1911, 12, 21), // 1330
    PackedYear::new(0x0A57, 1912, 12, 9), // 1331
    PackedYear::new(0x04B6, 1913, 11, 29), // 1332
    PackedYear::new(0x0AB5, 1914, 11, 18), // 1333
    PackedYear::new(0x05AA, 1915, 11, 8), // 1334
    PackedYear::new(0x0D55, 1916, 10, 27), // 1335
    PackedYear::new(0x0D2A, 1917, 10, 17), // 1336
    PackedYear::new(0x0A56, 1918, 10, 6), // 1337
    PackedYear::new(0x04AE, 1919, 9, 25), // 1338
    PackedYear::new(0x095D, 1920, 9, 13), // 1339
    PackedYear::new(0x02EC, 1921, 9, 3), // 1340
    PackedYear::new(0x06D5, 1922, 8, 23), // 1341
    PackedYear::new(0x06AA, 1923, 8, 13), // 1342
    PackedYear::new(0x0555, 1924, 8, 1), // 1343
    PackedYear::new(0x04AB, 1925, 7, 21), // 1344
    PackedYear::new(0x095B, 1926, 7, 10), // 1345
    PackedYear::new(0x02BA, 1927, 6, 30), // 1346
    PackedYear::new(0x0575, 1928, 6, 18), // 1347
    PackedYear::new(0x0BB2, 1929, 6, 8), // 1348
    PackedYear::new(0x0764, 1930, 5, 29), // 1349
    PackedYear::new(0x0749, 1931, 5, 18), // 1350
    PackedYear::new(0x0655, 1932, 5, 6), // 1351
    PackedYear::new(0x02AB, 1933, 4, 25), // 1352
    PackedYear::new(0x055B, 1934, 4, 14), // 1353
    PackedYear::new(0x0ADA, 1935, 4, 4), // 1354
    PackedYear::new(0x06D4, 1936, 3, 24), // 1355
    PackedYear::new(0x0EC9, 1937, 3, 13), // 1356
    PackedYear::new(0x0D92, 1938, 3, 3), // 1357
    PackedYear::new(0x0D25, 1939, 2, 20), // 1358
    PackedYear::new(0x0A4D, 1940, 2, 9), // 1359
    PackedYear::new(0x02AD, 1941, 1, 28), // 1360
    PackedYear::new(0x056D, 1942, 1, 17), // 1361
    PackedYear::new(0x0B6A, 1943, 1, 7), // 1362
    PackedYear::new(0x0B52, 1943, 12, 28), // 1363
    PackedYear::new(0x0AA5, 1944, 12, 16), // 1364
    PackedYear::new(0x0A4B, 1945, 12, 5), // 1365
    PackedYear::new(0x0497, 1946, 11, 24), // 1366
    PackedYear::new(0x0937, 1947, 11, 13), // 1367
    PackedYear::new(0x02B6, 1948, 11, 2), // 1368
    PackedYear::new(0x0575, 1949, 10, 22), // 1369
    PackedYear::new(0x0D6A, 1950, 10, 12), // 1370
    PackedYear::new(0x0D52, 1951, 10, 2), // 1371
    PackedYear::new(0x0A96, 1952, 9, 20), // 1372
    PackedYear::new(0x092D, 1953, 9, 9), // 1373
    PackedYear::new(0x025D, 1954, 8, 29), // 1374
    PackedYear::new(0x04DD, 1955, 8, 18), // 1375
    PackedYear::new(0x0ADA, 1956, 8, 7), // 1376
    PackedYear::new(0x05D4, 1957, 7, 28), // 1377
    PackedYear::new(0x0DA9, 1958, 7, 17), // 1378
    PackedYear::new(0x0D52, 1959, 7, 7), // 1379
    PackedYear::new(0x0AAA, 1960, 6, 25), // 1380
    PackedYear::new(0x04D6, 1961, 6, 14), // 1381
    PackedYear::new(0x09B6, 1962, 6, 3), // 1382
    PackedYear::new(0x0374, 1963, 5, 24), // 1383
    PackedYear::new(0x0769, 1964, 5, 12), // 1384
    PackedYear::new(0x0752, 1965, 5, 2), // 1385
    PackedYear::new(0x06A5, 1966, 4, 21), // 1386
    PackedYear::new(0x054B, 1967, 4, 10), // 1387
    PackedYear::new(0x0AAB, 1968, 3, 29), // 1388
    PackedYear::new(0x055A, 1969, 3, 19), // 1389
    PackedYear::new(0x0AD5, 1970, 3, 8), // 1390
    PackedYear::new(0x0DD2, 1971, 2, 26), // 1391
    PackedYear::new(0x0DA4, 1972, 2, 16), // 1392
    PackedYear::new(0x0D49, 1973, 2, 4), // 1393
    PackedYear::new(0x0A95, 1974, 1, 24), // 1394
    PackedYear::new(0x052D, 1975, 1, 13), // 1395
    PackedYear::new(0x0A5D, 1976, 1, 2), // 1396
    PackedYear::new(0x055A, 1976, 12, 22), // 1397
    PackedYear::new(0x0AD5, 1977, 12, 11), // 1398
    PackedYear::new(0x06AA, 1978, 12, 1), // 1399
    PackedYear::new(0x0695, 1979, 11, 20), // 1400
    PackedYear::new(0x052B, 1980, 11, 8), // 1401
    PackedYear::new(0x0A57, 1981, 10, 28), // 1402
    PackedYear::new(0x04AE, 1982, 10, 18), // 1403
    PackedYear::new(0x0976, 1983, 10, 7), // 1404
    PackedYear::new(0x056C, 1984, 9, 26), // 1405
    PackedYear::new(0x0B55, 1985, 9, 15), // 1406
    PackedYear::new(0x0AAA, 1986, 9, 5), // 1407
    PackedYear::new(0x0A55, 1987, 8, 25), // 1408
    PackedYear::new(0x04AD, 1988, 8, 13), // 1409
    PackedYear::new(0x095D, 1989, 8, 2), // 1410
    PackedYear::new(0x02DA, 1990, 7, 23), // 1411
    PackedYear::new(0x05D9, 1991, 7, 12), // 1412
    PackedYear::new(0x0DB2, 1992, 7, 1), // 1413
    PackedYear::new(0x0BA4, 1993, 6, 21), // 1414
    PackedYear::new(0x0B4A, 1994, 6, 10), // 1415
    PackedYear::new(0x0A55, 1995, 5, 30), // 1416
    PackedYear::new(0x02B5, 1996, 5, 18), // 1417
    PackedYear::new(0x0575, 1997, 5, 7), // 1418
    PackedYear::new(0x0B6A, 1998, 4, 27), // 1419
    PackedYear::new(0x0BD2, 1999, 4, 17), // 1420
    PackedYear::new(0x0BC4, 2000, 4, 6), // 1421
    PackedYear::new(0x0B89, 2001, 3, 26), // 1422
    PackedYear::new(0x0A95, 2002, 3, 15), // 1423
    PackedYear::new(0x052D, 2003, 3, 4), // 1424
    PackedYear::new(0x05AD, 2004, 2, 21), // 1425
    PackedYear::new(0x0B6A, 2005, 2, 10), // 1426
    PackedYear::new(0x06D4, 2006, 1, 31), // 1427
    PackedYear::new(0x0DC9, 2007, 1, 20), // 1428
    PackedYear::new(0x0D92, 2008, 1, 10), // 1429
    PackedYear::new(0x0AA6, 2008, 12, 29), // 1430
    PackedYear::new(0x0956, 2009, 12, 18), // 1431
    PackedYear::new(0x02AE, 2010, 12, 7), // 1432
    PackedYear::new(0x056D, 2011, 11, 26), // 1433
    PackedYear::new(0x036A, 2012, 11, 15), // 1434
    PackedYear::new(0x0B55, 2013, 11, 4), // 1435
    PackedYear::new(0x0AAA, 2014, 10, 25), // 1436
    PackedYear::new(0x094D, 2015, 10, 14), // 1437
    PackedYear::new(0x049D, 2016, 10, 2), // 1438
    PackedYear::new(0x095D, 2017, 9, 21), // 1439
    PackedYear::new(0x02BA, 2018, 9, 11), // 1440
    PackedYear::new(0x05B5, 2019, 8, 31), // 1441
    PackedYear::new(0x05AA, 2020, 8, 20), // 1442
    PackedYear::new(0x0D55, 2021, 8, 9), // 1443
    PackedYear::new(0x0A9A, 2022, 7, 30), // 1444
    PackedYear::new(0x092E, 2023, 7, 19), // 1445
    PackedYear::new(0x026E, 2024, 7, 7), // 1446
    PackedYear::new(0x055D, 2025, 6, 26), // 1447
    PackedYear::new(0x0ADA, 2026, 6, 16), // 1448
    PackedYear::new(0x06D4, 2027, 6, 6), // 1449
    PackedYear::new(0x06A5, 2028, 5, 25), // 1450
    PackedYear::new(0x054B, 2029, 5, 14), // 1451
    PackedYear::new(0x0A97, 2030, 5, 3), // 1452
    PackedYear::new(0x054E, 2031, 4, 23), // 1453
    PackedYear::new(0x0AAE, 2032, 4, 11), // 1454
    PackedYear::new(0x05AC, 2033, 4, 1), // 1455
    PackedYear::new(0x0BA9, 2034, 3, 21), // 1456
    PackedYear::new(0x0D92, 2035, 3, 11), // 1457
    PackedYear::new(0x0B25, 2036, 2, 28), // 1458
    PackedYear::new(0x064B, 2037, 2, 16), // 1459
    PackedYear::new(0x0CAB, 2038, 2, 5), // 1460
    PackedYear::new(0x055A, 2039, 1, 26), // 1461
    PackedYear::new(0x0B55, 2040, 1, 15), // 1462
    PackedYear::new(0x06D2, 2041, 1, 4), // 1463
    PackedYear::new(0x0EA5, 2041, 12, 24), // 1464
    PackedYear::new(0x0E4A, 2042, 12, 14), // 1465
    PackedYear::new(0x0A95, 2043, 12, 3), // 1466
    PackedYear::new(0x052D, 2044, 11, 21), // 1467
    PackedYear::new(0x0AAD, 2045, 11, 10), // 1468
    PackedYear::new(0x036C, 2046, 10, 31), // 1469
    PackedYear::new(0x0759, 2047, 10, 20), // 1470
    PackedYear::new(0x06D2, 2048, 10, 9), // 1471
    PackedYear::new(0x0695, 2049, 9, 28), // 1472
    PackedYear::new(0x052D, 2050, 9, 17), // 1473
    PackedYear::new(0x0A5B, 2051, 9, 6), // 1474
    PackedYear::new(0x04BA, 2052, 8, 26), // 1475
    PackedYear::new(0x09BA, 2053, 8, 15), // 1476
    PackedYear::new(0x03B4, 2054, 8, 5), // 1477
    PackedYear::new(0x0B69, 2055, 7, 25), // 1478
    PackedYear::new(0x0B52, 2056, 7, 14), // 1479
    PackedYear::new(0x0AA6, 2057, 7, 3), // 1480
    PackedYear::new(0x04B6, 2058, 6, 22), // 1481
    PackedYear::new(0x096D, 2059, 6, 11), // 1482
    PackedYear::new(0x02EC, 2060, 5, 31), // 1483
    PackedYear::new(0x06D9, 2061, 5, 20), // 1484
    PackedYear::new(0x0EB2, 2062, 5, 10), // 1485
    PackedYear::new(0x0D54, 2063, 4, 30), // 1486
    PackedYear::new(0x0D2A, 2064, 4, 18), // 1487
    PackedYear::new(0x0A56, 2065, 4, 7), // 1488
    PackedYear::new(0x04AE, 2066, 3, 27), // 1489
    PackedYear::new(0x096D, 2067, 3, 16), // 1490
    PackedYear::new(0x0D6A, 2068, 3, 5), // 1491
    PackedYear::new(0x0B54, 2069, 2, 23), // 1492
    PackedYear::new(0x0B29, 2070, 2, 12), // 1493
    PackedYear::new(0x0A93, 2071, 2, 1), // 1494
    PackedYear::new(0x052B, 2072, 1, 21), // 1495
    PackedYear::new(0x0A57, 2073, 1, 9), // 1496
    PackedYear::new(0x0536, 2073, 12, 30), // 1497
    PackedYear::new(0x0AB5, 2074, 12, 19), // 1498
    PackedYear::new(0x06AA, 2075, 12, 9), // 1499
    PackedYear::new(0x0E93, 2076, 11, 27), // 1500
    PackedYear::new(0x0000, 2077, 11, 17), // 1501
];
